//! Whole-program behavior.
//!
//! - `basics` - expressions, variables, control flow
//! - `functions` - calls, recursion, closures
//! - `classes` - instances, methods, inheritance

mod basics;
mod classes;
mod functions;
