//! Running files and the interactive prompt.

use std::io::{self, BufRead, Write};

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter};
use lox_eval::stdout_handler;
use tracing::debug;

use super::{read_file, report_outcome, stderr_emitter};
use crate::{DriverError, Session};

/// Run a whole file in a fresh session.
pub fn run_file(path: &str, color: ColorMode) -> Result<u8, DriverError> {
    let source = read_file(path)?;
    let mut session = Session::new(stdout_handler());
    let outcome = session.run(&source);
    debug!(path, exit = outcome.exit_code(), "finished");
    report_outcome(&mut stderr_emitter(color), &outcome);
    Ok(outcome.exit_code())
}

/// Interactive prompt on stdin/stdout.
pub fn repl(color: ColorMode) -> Result<u8, DriverError> {
    let mut session = Session::new(stdout_handler());
    let stdin = io::stdin();
    repl_with(
        &mut session,
        stdin.lock(),
        &mut io::stdout(),
        &mut stderr_emitter(color),
    )?;
    Ok(0)
}

/// Read-eval-print loop over arbitrary streams.
///
/// Each line runs in `session`, so globals persist from line to line.
/// Errors are reported to `emitter` and the loop goes on. Returns at end of
/// input.
pub fn repl_with<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    prompt: &mut W,
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<(), DriverError> {
    let mut line = String::new();
    loop {
        write!(prompt, "> ")?;
        prompt.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(prompt)?;
            return Ok(());
        }
        let outcome = session.run(&line);
        report_outcome(emitter, &outcome);
    }
}
