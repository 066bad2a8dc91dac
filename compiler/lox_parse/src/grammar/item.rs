//! Declarations: `class`, `fun`, `var`.

use lox_diagnostic::ErrorCode;
use lox_ir::{
    Expr, ExprKind, FunctionDecl, FunctionId, Stmt, StmtId, StmtKind, TokenKind,
};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser, MAX_ARGS};

/// What a `function` production is parsing, for error wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FunctionKind {
    Function,
    Method,
}

impl FunctionKind {
    fn as_str(self) -> &'static str {
        match self {
            FunctionKind::Function => "function",
            FunctionKind::Method => "method",
        }
    }
}

impl Parser<'_> {
    /// `declaration → classDecl | funDecl | varDecl | statement`
    ///
    /// On error, resynchronizes and returns `None`.
    pub(crate) fn declaration(&mut self) -> Option<StmtId> {
        let result = ensure_sufficient_stack(|| {
            let line = self.cursor.current().line;
            if self.cursor.eat(TokenKind::Class) {
                self.class_declaration(line)
            } else if self.cursor.eat(TokenKind::Fun) {
                let function = self.function(FunctionKind::Function)?;
                Ok(self
                    .arena
                    .alloc_stmt(Stmt::new(StmtKind::Function(function), line)))
            } else if self.cursor.eat(TokenKind::Var) {
                self.var_declaration(line)
            } else {
                self.statement()
            }
        });

        match result {
            Ok(stmt) => Some(stmt),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    /// `classDecl → "class" IDENT ( "<" IDENT )? "{" function* "}"`
    fn class_declaration(&mut self, line: u32) -> ParseResult<StmtId> {
        let name = self.expect_ident("Expect class name.")?;

        let superclass = if self.cursor.eat(TokenKind::Lt) {
            let superclass = self.expect_ident("Expect superclass name.")?;
            Some(self.arena.alloc_expr(Expr::new(
                ExprKind::Variable(superclass),
                superclass.line,
            )))
        } else {
            None
        };

        self.expect(TokenKind::LBrace, "Expect '{' before class body.")?;
        let mut methods = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            methods.push(self.function(FunctionKind::Method)?);
        }
        self.expect(TokenKind::RBrace, "Expect '}' after class body.")?;

        let methods = self.arena.alloc_function_list(methods);
        Ok(self.arena.alloc_stmt(Stmt::new(
            StmtKind::Class {
                name,
                superclass,
                methods,
            },
            line,
        )))
    }

    /// `function → IDENT "(" parameters? ")" block`
    pub(crate) fn function(&mut self, kind: FunctionKind) -> ParseResult<FunctionId> {
        let kind = kind.as_str();
        let name = self.expect_ident(&format!("Expect {kind} name."))?;
        self.expect(TokenKind::LParen, &format!("Expect '(' after {kind} name."))?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                if params.len() >= MAX_ARGS {
                    let current = *self.cursor.current();
                    self.report(
                        current,
                        ErrorCode::E1005,
                        "Can't have more than 255 parameters.",
                    );
                }
                params.push(self.expect_ident("Expect parameter name.")?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "Expect ')' after parameters.")?;
        self.expect(TokenKind::LBrace, &format!("Expect '{{' before {kind} body."))?;
        let body = self.block_body()?;

        let params = self.arena.alloc_params(params);
        let body = self.arena.alloc_stmt_list(body);
        Ok(self.arena.alloc_function(FunctionDecl { name, params, body }))
    }

    /// `varDecl → "var" IDENT ( "=" expression )? ";"`
    pub(crate) fn var_declaration(&mut self, line: u32) -> ParseResult<StmtId> {
        let name = self.expect_ident("Expect variable name.")?;
        let init = if self.cursor.eat(TokenKind::Eq) {
            Some(self.expression()?)
        } else {
            None
        };
        self.expect(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(self
            .arena
            .alloc_stmt(Stmt::new(StmtKind::Var { name, init }, line)))
    }
}
