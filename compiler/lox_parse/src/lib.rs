//! Recursive descent parser for Lox.
//!
//! Produces a flat AST in an `ExprArena`. Errors are collected as
//! diagnostics; after an error inside a declaration the parser skips to the
//! next statement boundary and keeps going, so one run reports every
//! independent syntax error.

mod cursor;
mod grammar;
mod recovery;

pub use cursor::Cursor;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{ExprArena, Ident, StmtId, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

/// Marker for an error that has already been recorded in `Parser::errors`.
/// Unwinds the current declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of call arguments and function parameters.
pub const MAX_ARGS: usize = 255;

/// Parser output.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub arena: ExprArena,
    /// Top-level statements, in source order.
    pub statements: Vec<StmtId>,
    pub errors: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    errors: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len() * 4),
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        ParseOutput {
            arena: self.arena,
            statements,
            errors: self.errors,
        }
    }

    /// Record an error at `token` without unwinding.
    fn report(&mut self, token: Token, code: ErrorCode, message: &str) {
        let diag = Diagnostic::error(code)
            .with_message(message)
            .with_line(token.line);
        let diag = if token.kind == TokenKind::Eof {
            diag.at_end()
        } else {
            diag.at_token(token.kind.lexeme(self.cursor.interner()))
        };
        self.errors.push(diag);
    }

    /// Record an error at `token` and return the unwind marker.
    fn error_at(&mut self, token: Token, code: ErrorCode, message: &str) -> ParseError {
        self.report(token, code, message);
        ParseError
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    fn expect(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance())
        } else {
            let current = *self.cursor.current();
            Err(self.error_at(current, ErrorCode::E1001, message))
        }
    }

    /// Consume an identifier or fail with `message`.
    fn expect_ident(&mut self, message: &str) -> ParseResult<Ident> {
        let current = *self.cursor.current();
        if let TokenKind::Ident(name) = current.kind {
            self.cursor.advance();
            Ok(Ident::new(name, current.line))
        } else {
            Err(self.error_at(current, ErrorCode::E1001, message))
        }
    }
}

/// Parse tokens into an arena plus top-level statement list.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let output = Parser::new(tokens, interner).parse_program();
    debug!(
        statements = output.statements.len(),
        exprs = output.arena.expr_count(),
        errors = output.errors.len(),
        "parsed"
    );
    output
}

#[cfg(test)]
mod tests;
