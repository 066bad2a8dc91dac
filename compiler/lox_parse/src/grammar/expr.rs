//! Expressions, from lowest to highest precedence.
//!
//! ```text
//! assignment → ( call "." )? IDENT "=" assignment | logic_or
//! logic_or   → logic_and ( "or" logic_and )*
//! logic_and  → equality ( "and" equality )*
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary ( ( "/" | "*" ) unary )*
//! unary      → ( "!" | "-" ) unary | call
//! call       → primary ( "(" arguments? ")" | "." IDENT )*
//! ```

use lox_diagnostic::ErrorCode;
use lox_ir::{
    BinaryOp, Expr, ExprId, ExprKind, Ident, Literal, LogicalOp, TokenKind, UnaryOp,
};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser, MAX_ARGS};

impl Parser<'_> {
    pub(crate) fn expression(&mut self) -> ParseResult<ExprId> {
        ensure_sufficient_stack(|| self.assignment())
    }

    fn alloc(&mut self, kind: ExprKind, line: u32) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, line))
    }

    fn assignment(&mut self) -> ParseResult<ExprId> {
        let expr = self.logic_or()?;

        if self.cursor.check(TokenKind::Eq) {
            let equals = self.cursor.advance();
            let value = self.assignment()?;

            let target = *self.arena.get_expr(expr);
            return match target.kind {
                ExprKind::Variable(name) => {
                    Ok(self.alloc(ExprKind::Assign { target: name, value }, name.line))
                }
                ExprKind::Get { object, name } => Ok(self.alloc(
                    ExprKind::Set {
                        object,
                        name,
                        value,
                    },
                    name.line,
                )),
                _ => {
                    // Reported but not unwound: the parser is not confused.
                    self.report(equals, ErrorCode::E1003, "Invalid assignment target.");
                    Ok(expr)
                }
            };
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> ParseResult<ExprId> {
        let mut left = self.logic_and()?;
        while self.cursor.check(TokenKind::Or) {
            let line = self.cursor.advance().line;
            let right = self.logic_and()?;
            left = self.alloc(
                ExprKind::Logical {
                    op: LogicalOp::Or,
                    left,
                    right,
                },
                line,
            );
        }
        Ok(left)
    }

    fn logic_and(&mut self) -> ParseResult<ExprId> {
        let mut left = self.equality()?;
        while self.cursor.check(TokenKind::And) {
            let line = self.cursor.advance().line;
            let right = self.equality()?;
            left = self.alloc(
                ExprKind::Logical {
                    op: LogicalOp::And,
                    left,
                    right,
                },
                line,
            );
        }
        Ok(left)
    }

    /// One left-associative binary precedence level.
    fn binary_level(
        &mut self,
        operator: fn(TokenKind) -> Option<BinaryOp>,
        operand: fn(&mut Self) -> ParseResult<ExprId>,
    ) -> ParseResult<ExprId> {
        let mut left = operand(self)?;
        while let Some(op) = operator(self.cursor.current_kind()) {
            let line = self.cursor.advance().line;
            let right = operand(self)?;
            left = self.alloc(ExprKind::Binary { op, left, right }, line);
        }
        Ok(left)
    }

    fn equality(&mut self) -> ParseResult<ExprId> {
        self.binary_level(
            |kind| match kind {
                TokenKind::BangEq => Some(BinaryOp::NotEq),
                TokenKind::EqEq => Some(BinaryOp::Eq),
                _ => None,
            },
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> ParseResult<ExprId> {
        self.binary_level(
            |kind| match kind {
                TokenKind::Gt => Some(BinaryOp::Gt),
                TokenKind::GtEq => Some(BinaryOp::GtEq),
                TokenKind::Lt => Some(BinaryOp::Lt),
                TokenKind::LtEq => Some(BinaryOp::LtEq),
                _ => None,
            },
            Self::term,
        )
    }

    fn term(&mut self) -> ParseResult<ExprId> {
        self.binary_level(
            |kind| match kind {
                TokenKind::Minus => Some(BinaryOp::Sub),
                TokenKind::Plus => Some(BinaryOp::Add),
                _ => None,
            },
            Self::factor,
        )
    }

    fn factor(&mut self) -> ParseResult<ExprId> {
        self.binary_level(
            |kind| match kind {
                TokenKind::Slash => Some(BinaryOp::Div),
                TokenKind::Star => Some(BinaryOp::Mul),
                _ => None,
            },
            Self::unary,
        )
    }

    fn unary(&mut self) -> ParseResult<ExprId> {
        let op = match self.cursor.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.call(),
        };
        let line = self.cursor.advance().line;
        let operand = ensure_sufficient_stack(|| self.unary())?;
        Ok(self.alloc(ExprKind::Unary { op, operand }, line))
    }

    fn call(&mut self) -> ParseResult<ExprId> {
        let mut expr = self.primary()?;
        loop {
            if self.cursor.eat(TokenKind::LParen) {
                expr = self.finish_call(expr)?;
            } else if self.cursor.eat(TokenKind::Dot) {
                let name = self.expect_ident("Expect property name after '.'.")?;
                expr = self.alloc(ExprKind::Get { object: expr, name }, name.line);
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Arguments after an already-consumed `(`.
    fn finish_call(&mut self, callee: ExprId) -> ParseResult<ExprId> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                if args.len() >= MAX_ARGS {
                    let current = *self.cursor.current();
                    self.report(
                        current,
                        ErrorCode::E1004,
                        "Can't have more than 255 arguments.",
                    );
                }
                args.push(self.expression()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self.expect(TokenKind::RParen, "Expect ')' after arguments.")?;
        let args = self.arena.alloc_expr_list(args);
        Ok(self.alloc(ExprKind::Call { callee, args }, paren.line))
    }

    fn primary(&mut self) -> ParseResult<ExprId> {
        let token = *self.cursor.current();
        let line = token.line;

        let literal = match token.kind {
            TokenKind::False => Some(Literal::Bool(false)),
            TokenKind::True => Some(Literal::Bool(true)),
            TokenKind::Nil => Some(Literal::Nil),
            TokenKind::Number(bits) => Some(Literal::Number(bits)),
            TokenKind::Str(name) => Some(Literal::Str(name)),
            _ => None,
        };
        if let Some(literal) = literal {
            self.cursor.advance();
            return Ok(self.alloc(ExprKind::Literal(literal), line));
        }

        match token.kind {
            TokenKind::Super => {
                self.cursor.advance();
                self.expect(TokenKind::Dot, "Expect '.' after 'super'.")?;
                let method = self.expect_ident("Expect superclass method name.")?;
                Ok(self.alloc(ExprKind::Super { method }, line))
            }
            TokenKind::This => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::This, line))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(self.alloc(
                    ExprKind::Variable(Ident::new(name, line)),
                    line,
                ))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.expect(TokenKind::RParen, "Expect ')' after expression.")?;
                Ok(self.alloc(ExprKind::Grouping(inner), line))
            }
            _ => Err(self.error_at(token, ErrorCode::E1002, "Expect expression.")),
        }
    }
}
