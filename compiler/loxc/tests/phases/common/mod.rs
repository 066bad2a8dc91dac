//! Shared helpers: run source through a buffered session.

use lox_diagnostic::Diagnostic;
use lox_eval::buffer_handler;
use loxc::{RunOutcome, Session};

/// A session whose `print` output is captured.
pub fn session() -> Session {
    Session::new(buffer_handler())
}

/// Run `source` in a fresh session, returning printed output and outcome.
pub fn run(source: &str) -> (String, RunOutcome) {
    let mut session = session();
    let outcome = session.run(source);
    (session.print_handler().take_output(), outcome)
}

/// Run `source`, asserting it succeeds, and return its output.
pub fn output(source: &str) -> String {
    let (out, outcome) = run(source);
    assert_eq!(outcome, RunOutcome::Ok, "program failed; output so far:\n{out}");
    out
}

/// Run `source`, asserting static errors, and return them.
pub fn static_errors(source: &str) -> Vec<Diagnostic> {
    match run(source) {
        (out, RunOutcome::StaticError(errors)) => {
            assert_eq!(out, "", "a program with static errors must not run");
            errors
        }
        (_, other) => panic!("expected static errors, got {other:?}"),
    }
}

/// Run `source`, asserting a runtime error; returns output and the error.
pub fn runtime_error(source: &str) -> (String, Diagnostic) {
    match run(source) {
        (out, RunOutcome::RuntimeError(error)) => (out, error),
        (_, other) => panic!("expected a runtime error, got {other:?}"),
    }
}
