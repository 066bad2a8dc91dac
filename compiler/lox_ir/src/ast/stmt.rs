//! Statement nodes and function declarations.

use super::expr::Ident;
use super::ids::{ExprId, FunctionId, StmtId};
use super::ranges::{FunctionRange, ParamRange, StmtRange};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: u32,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: u32) -> Self {
        Stmt { kind, line }
    }
}

/// Statement kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `{ ... }`
    Block(StmtRange),

    /// `class Name < Superclass { methods }`. `superclass` is always a
    /// `Variable` expression.
    Class {
        name: Ident,
        superclass: Option<ExprId>,
        methods: FunctionRange,
    },

    Expression(ExprId),

    /// `for (init; condition; increment) body`, kept as its own node.
    For {
        init: Option<StmtId>,
        condition: Option<ExprId>,
        increment: Option<ExprId>,
        body: StmtId,
    },

    Function(FunctionId),

    If {
        condition: ExprId,
        then_branch: StmtId,
        else_branch: Option<StmtId>,
    },

    Print(ExprId),

    /// `return value?;`. The node line is the `return` keyword's line.
    Return(Option<ExprId>),

    Var { name: Ident, init: Option<ExprId> },

    While { condition: ExprId, body: StmtId },
}

/// A function or method declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    pub name: Ident,
    pub params: ParamRange,
    pub body: StmtRange,
}

impl FunctionDecl {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
