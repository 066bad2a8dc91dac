use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_display_at_token() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("Expect ';' after value.")
        .with_line(3)
        .at_token("}");
    assert_eq!(diag.to_string(), "[line 3] Error at '}': Expect ';' after value.");
}

#[test]
fn test_display_at_end() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("Expect expression.")
        .with_line(1)
        .at_end();
    assert_eq!(diag.to_string(), "[line 1] Error at end: Expect expression.");
}

#[test]
fn test_display_without_location() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("Unexpected character.")
        .with_line(7);
    assert_eq!(diag.to_string(), "[line 7] Error: Unexpected character.");
}

#[test]
fn test_display_runtime() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("Operands must be numbers.")
        .with_line(12);
    assert!(diag.is_runtime());
    assert_eq!(diag.to_string(), "Operands must be numbers.\n[line 12]");
}

#[test]
fn test_warning_with_note() {
    let diag = Diagnostic::warning(ErrorCode::E2009)
        .with_message("Local variable is never used.")
        .with_line(4)
        .at_token("unused")
        .with_note("prefix the name with '_' to silence this");
    assert!(!diag.is_error());
    assert!(!diag.is_runtime());
    assert_eq!(
        diag.to_string(),
        "[line 4] Warning at 'unused': Local variable is never used."
    );
    assert_eq!(
        diag.notes,
        vec!["prefix the name with '_' to silence this".to_string()]
    );
}
