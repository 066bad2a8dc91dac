//! Statements.

use lox_ir::{Stmt, StmtId, StmtKind, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `statement → exprStmt | forStmt | ifStmt | printStmt | returnStmt
    ///            | whileStmt | block`
    pub(crate) fn statement(&mut self) -> ParseResult<StmtId> {
        ensure_sufficient_stack(|| {
            let line = self.cursor.current().line;
            match self.cursor.current_kind() {
                TokenKind::For => {
                    self.cursor.advance();
                    self.for_statement(line)
                }
                TokenKind::If => {
                    self.cursor.advance();
                    self.if_statement(line)
                }
                TokenKind::Print => {
                    self.cursor.advance();
                    let value = self.expression()?;
                    self.expect(TokenKind::Semicolon, "Expect ';' after value.")?;
                    Ok(self.alloc_stmt(StmtKind::Print(value), line))
                }
                TokenKind::Return => {
                    self.cursor.advance();
                    let value = if self.cursor.check(TokenKind::Semicolon) {
                        None
                    } else {
                        Some(self.expression()?)
                    };
                    self.expect(TokenKind::Semicolon, "Expect ';' after return value.")?;
                    Ok(self.alloc_stmt(StmtKind::Return(value), line))
                }
                TokenKind::While => {
                    self.cursor.advance();
                    self.expect(TokenKind::LParen, "Expect '(' after 'while'.")?;
                    let condition = self.expression()?;
                    self.expect(TokenKind::RParen, "Expect ')' after condition.")?;
                    let body = self.statement()?;
                    Ok(self.alloc_stmt(StmtKind::While { condition, body }, line))
                }
                TokenKind::LBrace => {
                    self.cursor.advance();
                    let body = self.block_body()?;
                    let body = self.arena.alloc_stmt_list(body);
                    Ok(self.alloc_stmt(StmtKind::Block(body), line))
                }
                _ => {
                    let expr = self.expression()?;
                    self.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
                    Ok(self.alloc_stmt(StmtKind::Expression(expr), line))
                }
            }
        })
    }

    fn alloc_stmt(&mut self, kind: StmtKind, line: u32) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(kind, line))
    }

    /// Declarations up to the closing `}`, which is consumed. The opening
    /// `{` must already be consumed.
    pub(crate) fn block_body(&mut self) -> ParseResult<Vec<StmtId>> {
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration() {
                stmts.push(stmt);
            }
        }
        self.expect(TokenKind::RBrace, "Expect '}' after block.")?;
        Ok(stmts)
    }

    /// `forStmt → "for" "(" ( varDecl | exprStmt | ";" ) expression? ";"
    ///            expression? ")" statement`
    fn for_statement(&mut self, line: u32) -> ParseResult<StmtId> {
        self.expect(TokenKind::LParen, "Expect '(' after 'for'.")?;

        let init_line = self.cursor.current().line;
        let init = if self.cursor.eat(TokenKind::Semicolon) {
            None
        } else if self.cursor.eat(TokenKind::Var) {
            Some(self.var_declaration(init_line)?)
        } else {
            let expr = self.expression()?;
            self.expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
            Some(self.alloc_stmt(StmtKind::Expression(expr), init_line))
        };

        let condition = if self.cursor.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.cursor.check(TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(TokenKind::RParen, "Expect ')' after for clauses.")?;

        let body = self.statement()?;
        Ok(self.alloc_stmt(
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            },
            line,
        ))
    }

    /// `ifStmt → "if" "(" expression ")" statement ( "else" statement )?`
    fn if_statement(&mut self, line: u32) -> ParseResult<StmtId> {
        self.expect(TokenKind::LParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RParen, "Expect ')' after if condition.")?;

        let then_branch = self.statement()?;
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(self.statement()?)
        } else {
            None
        };

        Ok(self.alloc_stmt(
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            },
            line,
        ))
    }
}
