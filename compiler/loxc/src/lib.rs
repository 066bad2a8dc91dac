//! The Lox driver.
//!
//! [`Session`] runs source text through the whole pipeline: lex, parse,
//! resolve, interpret. The `lox` binary wraps it in a file runner, a REPL,
//! and a few inspection commands.

pub mod commands;
mod error;
mod session;
pub mod tracing_setup;

pub use error::DriverError;
pub use session::{RunOutcome, Session};

/// Exit status for bad command-line usage.
pub const EX_USAGE: u8 = 64;
/// Exit status for a program with static (lex, parse, resolve) errors.
pub const EX_DATAERR: u8 = 65;
/// Exit status for a program that failed at runtime.
pub const EX_SOFTWARE: u8 = 70;
/// Exit status when a file can't be read.
pub const EX_IOERR: u8 = 74;
