//! Reporting diagnostics to a stream.
//!
//! `TerminalEmitter` writes coded, optionally colored diagnostics for the
//! CLI. Callers that only need the classic one-line form use
//! `Diagnostic`'s `Display` instead.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// A sink for diagnostics. The driver reports through `&mut dyn
/// DiagnosticEmitter` so tests can capture output in memory.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Closing line: `error: aborting due to ...` or the warning count.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
