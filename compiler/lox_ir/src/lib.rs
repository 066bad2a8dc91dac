//! Lox IR - shared data structures for every phase.
//!
//! This crate contains:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The flat AST (`Expr`, `Stmt`, `FunctionDecl`) stored in an `ExprArena`
//! - `AstPrinter`, an S-expression dump of parsed programs
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Node identity**: every variable-use node has its own `ExprId`, which is
//!   the key the resolver hands to the evaluator
//!
//! Types that contain floats store them as u64 bits so they stay `Eq + Hash`.

mod arena;
pub mod ast;
mod interner;
mod name;
mod printer;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, Expr, ExprId, ExprKind, ExprRange, FunctionDecl, FunctionId, FunctionRange, Ident,
    Literal, LogicalOp, ParamRange, Stmt, StmtId, StmtKind, StmtRange, UnaryOp,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use printer::AstPrinter;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
