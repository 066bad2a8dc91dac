//! Failure outcomes and the REPL loop.
//!
//! - `static_errors` - programs rejected before running
//! - `runtime_errors` - programs stopped while running
//! - `repl` - line-by-line sessions
//! - `properties` - determinism and arithmetic properties

mod properties;
mod repl;
mod runtime_errors;
mod static_errors;
