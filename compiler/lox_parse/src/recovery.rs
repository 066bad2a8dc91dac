//! Panic-mode error recovery.

use lox_ir::TokenKind;

use crate::Parser;

impl Parser<'_> {
    /// Skip tokens until a likely statement boundary: just after a `;`, or
    /// in front of a keyword that starts a declaration or statement.
    pub(crate) fn synchronize(&mut self) {
        self.cursor.advance();
        while !self.cursor.is_at_end() {
            if self.cursor.previous().kind == TokenKind::Semicolon {
                return;
            }
            if self.cursor.current_kind().starts_statement() {
                return;
            }
            self.cursor.advance();
        }
    }
}
