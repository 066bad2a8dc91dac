//! Lexer for Lox using logos with string interning.
//!
//! This lexer:
//! - Interns identifiers and string literal contents
//! - Skips whitespace, `//` line comments, and non-nesting `/* */` comments
//! - Tracks the 1-based line of every token
//! - Reports bad input as diagnostics and keeps scanning

mod raw_token;

use logos::Logos;
use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

use raw_token::{RawToken, StringEnd};

/// Lexer output: tokens (always `Eof`-terminated) plus lex errors.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<Diagnostic>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Counts lines lazily: newlines between the last token start and the next
/// one, which covers skipped whitespace, comments, and multi-line strings.
struct LineCounter<'src> {
    source: &'src str,
    scanned: usize,
    line: u32,
}

impl<'src> LineCounter<'src> {
    fn new(source: &'src str) -> Self {
        LineCounter {
            source,
            scanned: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, offset: usize) -> u32 {
        if offset > self.scanned {
            let skipped = self.source.get(self.scanned..offset).unwrap_or("");
            let newlines = skipped.bytes().filter(|&b| b == b'\n').count();
            self.line += u32::try_from(newlines).unwrap_or(u32::MAX);
            self.scanned = offset;
        }
        self.line
    }
}

/// Lex source code into tokens.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput::default();
    let mut lines = LineCounter::new(source);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let line = lines.line_at(range.start);
        let span = Span::from_range(range);
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::Str(StringEnd::Unclosed)) => {
                output.errors.push(
                    Diagnostic::error(ErrorCode::E0001)
                        .with_message("Unterminated string.")
                        .with_line(line),
                );
            }
            Ok(raw) => {
                if let Some(kind) = convert_token(raw, slice, interner) {
                    output.tokens.push(Token::new(kind, span, line));
                }
            }
            Err(()) => {
                output.errors.push(
                    Diagnostic::error(ErrorCode::E0002)
                        .with_message("Unexpected character.")
                        .with_line(line),
                );
            }
        }
    }

    let eof_line = lines.line_at(source.len());
    let eof_span = Span::point(u32::try_from(source.len()).unwrap_or(u32::MAX));
    output
        .tokens
        .push(Token::new(TokenKind::Eof, eof_span, eof_line));

    debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}

/// Convert a raw token to a `TokenKind`, interning strings.
///
/// Returns `None` for trivia.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment | RawToken::BlockComment => return None,

        RawToken::Number(value) => TokenKind::number(value),
        RawToken::Str(_) => {
            let content = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or("");
            TokenKind::Str(interner.intern(content))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEq => TokenKind::BangEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,

        RawToken::And => TokenKind::And,
        RawToken::Class => TokenKind::Class,
        RawToken::Else => TokenKind::Else,
        RawToken::False => TokenKind::False,
        RawToken::For => TokenKind::For,
        RawToken::Fun => TokenKind::Fun,
        RawToken::If => TokenKind::If,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Or => TokenKind::Or,
        RawToken::Print => TokenKind::Print,
        RawToken::Return => TokenKind::Return,
        RawToken::Super => TokenKind::Super,
        RawToken::This => TokenKind::This,
        RawToken::True => TokenKind::True,
        RawToken::Var => TokenKind::Var,
        RawToken::While => TokenKind::While,
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
