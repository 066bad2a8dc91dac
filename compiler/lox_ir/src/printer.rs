//! S-expression rendering of parsed programs.
//!
//! Used by `lox parse` and by parser tests to compare tree shapes as text.

use std::fmt::Write;

use crate::ast::{ExprId, ExprKind, FunctionId, Literal, StmtId, StmtKind};
use crate::{ExprArena, Name, StringInterner};

/// Renders arena nodes as parenthesized prefix notation, e.g.
/// `(+ 1 (* 2 3))` or `(var a 1)`.
pub struct AstPrinter<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl<'a> AstPrinter<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        AstPrinter { arena, interner }
    }

    /// Render top-level statements, one per line.
    pub fn statements(&self, stmts: &[StmtId]) -> String {
        let mut out = String::new();
        for (i, &stmt) in stmts.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.write_stmt(&mut out, stmt);
        }
        out
    }

    pub fn stmt(&self, id: StmtId) -> String {
        let mut out = String::new();
        self.write_stmt(&mut out, id);
        out
    }

    pub fn expr(&self, id: ExprId) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, id);
        out
    }

    fn name(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    fn write_stmt(&self, out: &mut String, id: StmtId) {
        match self.arena.get_stmt(id).kind {
            StmtKind::Block(body) => {
                out.push_str("(block");
                self.write_stmt_list(out, self.arena.get_stmt_list(body));
                out.push(')');
            }
            StmtKind::Class {
                name,
                superclass,
                methods,
            } => {
                let _ = write!(out, "(class {}", self.name(name.name));
                if let Some(superclass) = superclass {
                    out.push_str(" < ");
                    self.write_expr(out, superclass);
                }
                for &method in self.arena.get_function_list(methods) {
                    out.push(' ');
                    self.write_function(out, method);
                }
                out.push(')');
            }
            StmtKind::Expression(expr) => {
                out.push_str("(expr ");
                self.write_expr(out, expr);
                out.push(')');
            }
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            } => {
                out.push_str("(for ");
                match init {
                    Some(init) => self.write_stmt(out, init),
                    None => out.push('_'),
                }
                out.push(' ');
                self.write_optional_expr(out, condition);
                out.push(' ');
                self.write_optional_expr(out, increment);
                out.push(' ');
                self.write_stmt(out, body);
                out.push(')');
            }
            StmtKind::Function(function) => self.write_function(out, function),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push_str("(if ");
                self.write_expr(out, condition);
                out.push(' ');
                self.write_stmt(out, then_branch);
                if let Some(else_branch) = else_branch {
                    out.push(' ');
                    self.write_stmt(out, else_branch);
                }
                out.push(')');
            }
            StmtKind::Print(expr) => {
                out.push_str("(print ");
                self.write_expr(out, expr);
                out.push(')');
            }
            StmtKind::Return(value) => {
                out.push_str("(return");
                if let Some(value) = value {
                    out.push(' ');
                    self.write_expr(out, value);
                }
                out.push(')');
            }
            StmtKind::Var { name, init } => {
                let _ = write!(out, "(var {}", self.name(name.name));
                if let Some(init) = init {
                    out.push(' ');
                    self.write_expr(out, init);
                }
                out.push(')');
            }
            StmtKind::While { condition, body } => {
                out.push_str("(while ");
                self.write_expr(out, condition);
                out.push(' ');
                self.write_stmt(out, body);
                out.push(')');
            }
        }
    }

    fn write_stmt_list(&self, out: &mut String, stmts: &[StmtId]) {
        for &stmt in stmts {
            out.push(' ');
            self.write_stmt(out, stmt);
        }
    }

    fn write_function(&self, out: &mut String, id: FunctionId) {
        let function = self.arena.get_function(id);
        let _ = write!(out, "(fun {} (", self.name(function.name.name));
        for (i, param) in self.arena.get_params(function.params).iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(self.name(param.name));
        }
        out.push(')');
        self.write_stmt_list(out, self.arena.get_stmt_list(function.body));
        out.push(')');
    }

    fn write_optional_expr(&self, out: &mut String, expr: Option<ExprId>) {
        match expr {
            Some(expr) => self.write_expr(out, expr),
            None => out.push('_'),
        }
    }

    fn write_expr(&self, out: &mut String, id: ExprId) {
        match self.arena.get_expr(id).kind {
            ExprKind::Assign { target, value } => {
                let _ = write!(out, "(= {} ", self.name(target.name));
                self.write_expr(out, value);
                out.push(')');
            }
            ExprKind::Binary { op, left, right } => {
                self.parenthesize(out, op.as_symbol(), &[left, right]);
            }
            ExprKind::Call { callee, args } => {
                out.push_str("(call ");
                self.write_expr(out, callee);
                for &arg in self.arena.get_expr_list(args) {
                    out.push(' ');
                    self.write_expr(out, arg);
                }
                out.push(')');
            }
            ExprKind::Get { object, name } => {
                out.push_str("(. ");
                self.write_expr(out, object);
                let _ = write!(out, " {})", self.name(name.name));
            }
            ExprKind::Grouping(inner) => self.parenthesize(out, "group", &[inner]),
            ExprKind::Literal(literal) => match literal {
                Literal::Nil => out.push_str("nil"),
                Literal::Bool(b) => {
                    let _ = write!(out, "{b}");
                }
                Literal::Number(bits) => {
                    let _ = write!(out, "{}", f64::from_bits(bits));
                }
                Literal::Str(s) => {
                    let _ = write!(out, "\"{}\"", self.name(s));
                }
            },
            ExprKind::Logical { op, left, right } => {
                self.parenthesize(out, op.as_symbol(), &[left, right]);
            }
            ExprKind::Set {
                object,
                name,
                value,
            } => {
                out.push_str("(set ");
                self.write_expr(out, object);
                let _ = write!(out, " {} ", self.name(name.name));
                self.write_expr(out, value);
                out.push(')');
            }
            ExprKind::Super { method } => {
                let _ = write!(out, "(super {})", self.name(method.name));
            }
            ExprKind::This => out.push_str("this"),
            ExprKind::Unary { op, operand } => self.parenthesize(out, op.as_symbol(), &[operand]),
            ExprKind::Variable(ident) => out.push_str(self.name(ident.name)),
        }
    }

    fn parenthesize(&self, out: &mut String, head: &str, exprs: &[ExprId]) {
        out.push('(');
        out.push_str(head);
        for &expr in exprs {
            out.push(' ');
            self.write_expr(out, expr);
        }
        out.push(')');
    }
}
