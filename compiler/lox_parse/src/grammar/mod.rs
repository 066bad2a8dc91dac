//! Grammar productions, split by syntactic category.
//!
//! - `item`: class, function, and variable declarations
//! - `stmt`: statements
//! - `expr`: expressions, lowest to highest precedence

mod expr;
mod item;
mod stmt;
