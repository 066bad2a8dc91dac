//! Flat AST node definitions.
//!
//! Nodes are `Copy` and reference children through arena indices, so both
//! passes can copy a node out of the arena and match on it while holding
//! `&mut self`.

mod expr;
mod ids;
mod operators;
mod ranges;
mod stmt;

pub use expr::{Expr, ExprKind, Ident, Literal};
pub use ids::{ExprId, FunctionId, StmtId};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use ranges::{ExprRange, FunctionRange, ParamRange, StmtRange};
pub use stmt::{FunctionDecl, Stmt, StmtKind};
