//! Command implementations for the `lox` binary.
//!
//! Each command returns the process exit status it wants; `main` turns a
//! `DriverError` into its own status.

mod check;
mod debug;
mod run;

use std::io::IsTerminal;

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::Diagnostic;

use crate::{DriverError, RunOutcome};

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use run::{repl, repl_with, run_file};

/// Read a source file, mapping failures to a readable message.
pub fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::read_file(path, e))
}

/// A diagnostic emitter writing to stderr.
pub fn stderr_emitter(color: ColorMode) -> TerminalEmitter<std::io::Stderr> {
    TerminalEmitter::stderr(color, std::io::stderr().is_terminal())
}

/// Emit `diagnostics` followed by the summary line.
pub fn report_diagnostics(emitter: &mut dyn DiagnosticEmitter, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    emitter.emit_all(diagnostics);
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    emitter.emit_summary(errors, diagnostics.len() - errors);
    emitter.flush();
}

/// Report whatever diagnostics `outcome` carries.
pub fn report_outcome(emitter: &mut dyn DiagnosticEmitter, outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Ok => {}
        RunOutcome::StaticError(diagnostics) => report_diagnostics(emitter, diagnostics),
        RunOutcome::RuntimeError(diagnostic) => {
            emitter.emit(diagnostic);
            emitter.flush();
        }
    }
}
