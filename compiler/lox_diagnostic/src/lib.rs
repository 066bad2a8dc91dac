//! Diagnostic system for error reporting across every phase.
//!
//! - Error codes for searchability (`E0xxx` lexer through `E6xxx` runtime)
//! - Clear messages (what went wrong)
//! - Line and token location (where it went wrong)
//! - Notes for extra context
//!
//! `Diagnostic`'s `Display` produces the classic one-line form
//! (`[line 3] Error at 'x': message`); `emitter::TerminalEmitter` produces
//! the coded, optionally colored form used by the CLI.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use error_code::{ErrorCode, Phase};
