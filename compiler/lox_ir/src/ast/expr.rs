//! Expression nodes.

use super::ids::ExprId;
use super::operators::{BinaryOp, LogicalOp, UnaryOp};
use super::ranges::ExprRange;
use crate::Name;

/// An identifier occurrence: the interned name and the line it appeared on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: Name,
    pub line: u32,
}

impl Ident {
    pub fn new(name: Name, line: u32) -> Self {
        Ident { name, line }
    }
}

/// Literal values embedded in the tree.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Nil,
    Bool(bool),
    /// `f64` bits.
    Number(u64),
    Str(Name),
}

impl Literal {
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }
}

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Expr { kind, line }
    }
}

/// Expression kinds. A closed set: the resolver and the evaluator match on
/// it exhaustively.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// `target = value`
    Assign { target: Ident, value: ExprId },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `callee(args...)`. The node line is the closing paren's line.
    Call { callee: ExprId, args: ExprRange },

    /// `object.name`
    Get { object: ExprId, name: Ident },

    /// `(expr)`
    Grouping(ExprId),

    Literal(Literal),

    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },

    /// `object.name = value`
    Set {
        object: ExprId,
        name: Ident,
        value: ExprId,
    },

    /// `super.method`
    Super { method: Ident },

    This,

    Unary { op: UnaryOp, operand: ExprId },

    Variable(Ident),
}
