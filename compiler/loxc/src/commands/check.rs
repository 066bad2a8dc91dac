//! `lox check`: static analysis without execution.

use lox_diagnostic::emitter::ColorMode;
use lox_diagnostic::Diagnostic;
use lox_eval::silent_handler;

use super::{read_file, report_diagnostics, stderr_emitter};
use crate::{DriverError, Session, EX_DATAERR};

/// Lex, parse and resolve a file, reporting every static error and
/// warning. Warnings alone don't fail the check.
pub fn check_file(path: &str, color: ColorMode) -> Result<u8, DriverError> {
    let source = read_file(path)?;
    let session = Session::new(silent_handler());
    let diagnostics = session.check(&source);
    if diagnostics.is_empty() {
        println!("{path}: no errors found");
        return Ok(0);
    }
    report_diagnostics(&mut stderr_emitter(color), &diagnostics);
    if diagnostics.iter().any(Diagnostic::is_error) {
        Ok(EX_DATAERR)
    } else {
        Ok(0)
    }
}
