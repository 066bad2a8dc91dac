use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2008.as_str(), "E2008");
}

#[test]
fn test_error_code_phase() {
    assert_eq!(ErrorCode::E0002.phase(), Phase::Lexer);
    assert_eq!(ErrorCode::E1003.phase(), Phase::Parser);
    assert_eq!(ErrorCode::E2001.phase(), Phase::Resolver);
    assert_eq!(ErrorCode::E6005.phase(), Phase::Runtime);
    assert!(ErrorCode::E6001.is_runtime());
    assert!(!ErrorCode::E2004.is_runtime());
    assert_eq!(ErrorCode::E2009.phase(), Phase::Resolver);
}

#[test]
fn test_error_code_description() {
    assert_eq!(ErrorCode::E6005.description(), "arity mismatch");
    assert_eq!(ErrorCode::E0001.description(), "unterminated string literal");
}
