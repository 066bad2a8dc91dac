use std::io::Cursor;

use lox_diagnostic::emitter::{ColorMode, TerminalEmitter};
use loxc::commands::repl_with;
use pretty_assertions::assert_eq;

use crate::common::session;

/// Feed `lines` to a REPL; returns (printed output, prompts, diagnostics).
fn repl(input: &str) -> (String, String, String) {
    let mut session = session();
    let mut prompt = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    repl_with(&mut session, Cursor::new(input), &mut prompt, &mut emitter).unwrap();
    (
        session.print_handler().take_output(),
        String::from_utf8(prompt).unwrap(),
        String::from_utf8(emitter.into_inner()).unwrap(),
    )
}

#[test]
fn test_globals_persist_across_lines() {
    let (out, prompts, errors) = repl("var a = 1;\nfun inc() { a = a + 1; }\ninc();\nprint a;\n");
    assert_eq!(out, "2\n");
    assert_eq!(prompts, "> > > > > \n");
    assert_eq!(errors, "");
}

#[test]
fn test_errors_do_not_end_the_session() {
    let (out, _, errors) = repl("print ;\nprint nope;\nvar ok = \"still here\";\nprint ok;\n");
    assert_eq!(out, "still here\n");
    assert!(errors.contains("error[E1002]: Expect expression."), "{errors}");
    assert!(errors.contains("error[E6002]: Undefined variable 'nope'."), "{errors}");
}

#[test]
fn test_definitions_before_runtime_error_survive() {
    let (out, _, _) = repl("var x = 10; nil();\nprint x;\n");
    assert_eq!(out, "10\n");
}

#[test]
fn test_closures_from_earlier_lines() {
    let input = "\
fun make() { var n = 0; fun next() { n = n + 1; return n; } return next; }
var counter = make();
print counter();
print counter();
";
    let (out, _, errors) = repl(input);
    assert_eq!(errors, "");
    assert_eq!(out, "1\n2\n");
}

#[test]
fn test_empty_input() {
    let (out, prompts, _) = repl("");
    assert_eq!(out, "");
    assert_eq!(prompts, "> \n");
}
