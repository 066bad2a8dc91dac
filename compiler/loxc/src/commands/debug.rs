//! Inspection commands: token and syntax tree dumps.

use lox_diagnostic::emitter::ColorMode;
use lox_ir::{AstPrinter, StringInterner, Token, TokenKind};

use super::{read_file, report_diagnostics, stderr_emitter};
use crate::{DriverError, EX_DATAERR};

/// Print every token of a file, one per line: `line class text`, where
/// `text` is the token's exact source text.
pub fn lex_file(path: &str, color: ColorMode) -> Result<u8, DriverError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let output = lox_lexer::lex(&source, &interner);

    for token in output.tokens.iter() {
        println!("{}", render_token(token, &source));
    }

    report_diagnostics(&mut stderr_emitter(color), &output.errors);
    Ok(if output.has_errors() { EX_DATAERR } else { 0 })
}

/// Print the parsed program in S-expression form.
pub fn parse_file(path: &str, color: ColorMode) -> Result<u8, DriverError> {
    let source = read_file(path)?;
    let interner = StringInterner::new();
    let lexed = lox_lexer::lex(&source, &interner);
    let parsed = lox_parse::parse(&lexed.tokens, &interner);

    let printed = AstPrinter::new(&parsed.arena, &interner).statements(&parsed.statements);
    if !printed.is_empty() {
        println!("{printed}");
    }

    let mut errors = lexed.errors;
    errors.extend(parsed.errors);
    report_diagnostics(&mut stderr_emitter(color), &errors);
    Ok(if errors.is_empty() { 0 } else { EX_DATAERR })
}

fn render_token(token: &Token, source: &str) -> String {
    let class = match token.kind {
        TokenKind::Ident(_) => "Ident",
        TokenKind::Str(_) => "String",
        TokenKind::Number(_) => "Number",
        TokenKind::Eof => "Eof",
        kind if kind.is_keyword() => "Keyword",
        _ => "Punct",
    };
    format!("{:>4} {class:<8} {}", token.line, token.span.slice(source))
}
