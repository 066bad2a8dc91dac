use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> (Vec<TokenKind>, StringInterner) {
    let interner = StringInterner::new();
    let output = lex(source, &interner);
    assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
    let kinds = output.tokens.iter().map(|t| t.kind).collect();
    (kinds, interner)
}

#[test]
fn test_punctuation_and_operators() {
    let (kinds, _) = kinds("(){},.-+;/* */*! != = == > >= < <=");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Bang,
            TokenKind::BangEq,
            TokenKind::Eq,
            TokenKind::EqEq,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Lt,
            TokenKind::LtEq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_win_over_identifiers() {
    let (kinds, interner) = kinds("class classy fun _fun orchid or");
    assert_eq!(kinds[0], TokenKind::Class);
    assert_eq!(kinds[1], TokenKind::Ident(interner.intern("classy")));
    assert_eq!(kinds[2], TokenKind::Fun);
    assert_eq!(kinds[3], TokenKind::Ident(interner.intern("_fun")));
    assert_eq!(kinds[4], TokenKind::Ident(interner.intern("orchid")));
    assert_eq!(kinds[5], TokenKind::Or);
}

#[test]
fn test_numbers() {
    let (kinds, _) = kinds("123 45.67 8.");
    assert_eq!(kinds[0].as_number(), Some(123.0));
    assert_eq!(kinds[1].as_number(), Some(45.67));
    assert_eq!(kinds[2].as_number(), Some(8.0));
    assert_eq!(kinds[3], TokenKind::Dot);
}

#[test]
fn test_string_contents_are_interned_without_quotes() {
    let (kinds, interner) = kinds("\"hello world\"");
    assert_eq!(kinds[0], TokenKind::Str(interner.intern("hello world")));
}

#[test]
fn test_line_tracking_across_strings_and_comments() {
    let interner = StringInterner::new();
    let source = "var a;\n\"two\nlines\" // note\n/* block\ncomment */ b\n";
    let output = lex(source, &interner);
    let lines: Vec<u32> = output.tokens.iter().map(|t| t.line).collect();
    // var a ; "two\nlines" b EOF
    assert_eq!(lines, vec![1, 1, 1, 2, 5, 6]);
}

#[test]
fn test_block_comment_ends_at_first_close() {
    let (kinds, interner) = kinds("/* outer /* inner */ x */");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident(interner.intern("x")),
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unterminated_block_comment_consumes_rest() {
    let (kinds, _) = kinds("print /* never closed\nprint");
    assert_eq!(kinds, vec![TokenKind::Print, TokenKind::Eof]);
}

#[test]
fn test_unterminated_string_reports_error() {
    let interner = StringInterner::new();
    let output = lex("print \"oops", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E0001);
    assert_eq!(
        output.errors[0].to_string(),
        "[line 1] Error: Unterminated string."
    );
    let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Print, TokenKind::Eof]);
}

#[test]
fn test_unexpected_character_keeps_scanning() {
    let interner = StringInterner::new();
    let output = lex("a @ b\n#", &interner);
    assert_eq!(output.errors.len(), 2);
    assert!(output.has_errors());
    assert_eq!(output.errors[0].line, 1);
    assert_eq!(output.errors[1].line, 2);
    assert_eq!(output.tokens.len(), 3);
}

#[test]
fn test_empty_source_is_just_eof() {
    let (kinds, _) = kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}
