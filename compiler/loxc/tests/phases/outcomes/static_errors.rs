use lox_diagnostic::ErrorCode;
use loxc::{RunOutcome, EX_DATAERR};
use pretty_assertions::assert_eq;

use crate::common::{run, static_errors};

fn rendered(source: &str) -> Vec<String> {
    static_errors(source)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_static_error_exit_code() {
    let (_, outcome) = run("print 1 +;");
    assert_eq!(outcome.exit_code(), EX_DATAERR);
    assert!(!outcome.is_ok());
}

#[test]
fn test_parse_error_blocks_earlier_statements() {
    assert_eq!(
        rendered("print \"never\";\nprint (1;"),
        vec!["[line 2] Error at ';': Expect ')' after expression."]
    );
}

#[test]
fn test_lexer_and_parser_errors_are_reported_together() {
    let errors = static_errors("var s = \"open;\nprint @;");
    let codes: Vec<_> = errors.iter().map(|d| d.code).collect();
    assert!(codes.contains(&ErrorCode::E0001), "{codes:?}");
    assert!(
        errors.iter().all(|d| d.code.as_str().starts_with("E0") || d.code.as_str().starts_with("E1")),
        "{codes:?}"
    );
}

#[test]
fn test_unexpected_character_alone() {
    assert_eq!(
        rendered("print 1; @"),
        vec!["[line 1] Error: Unexpected character."]
    );
}

#[test]
fn test_recovery_reports_each_statement() {
    let errors = rendered("var = 1;\nprint ;\nvar ok = 2;\nfun (a) {}");
    assert_eq!(
        errors,
        vec![
            "[line 1] Error at '=': Expect variable name.",
            "[line 2] Error at ';': Expect expression.",
            "[line 4] Error at '(': Expect function name.",
        ]
    );
}

#[test]
fn test_error_at_end() {
    assert_eq!(
        rendered("print 1"),
        vec!["[line 1] Error at end: Expect ';' after value."]
    );
}

#[test]
fn test_own_initializer_is_rejected() {
    assert_eq!(
        rendered("var a = 1;\n{\n  var a = a;\n}"),
        vec!["[line 3] Error at 'a': Can't read local variable in its own initializer."]
    );
}

#[test]
fn test_resolver_errors() {
    assert_eq!(
        rendered("return 1;"),
        vec!["[line 1] Error at 'return': Can't return from top-level code."]
    );
    assert_eq!(
        rendered("print this;"),
        vec!["[line 1] Error at 'this': Can't use 'this' outside of a class."]
    );
    assert_eq!(
        rendered("class A { m() { super.m(); } }"),
        vec!["[line 1] Error at 'super': Can't use 'super' in a class with no superclass."]
    );
    assert_eq!(
        rendered("class A < A {}"),
        vec!["[line 1] Error at 'A': A class can't inherit from itself."]
    );
    assert_eq!(
        rendered("fun f() { var a; var a; }"),
        vec!["[line 1] Error at 'a': Already a variable with this name in this scope."]
    );
    assert_eq!(
        rendered("class A { init() { return 1; } }"),
        vec!["[line 1] Error at 'return': Can't return a value from an initializer."]
    );
}

#[test]
fn test_resolver_does_not_run_after_parse_errors() {
    let errors = static_errors("return 1;\nprint ;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::E1002);
}

#[test]
fn test_check_reports_without_running() {
    let session = crate::common::session();
    assert!(session.check("print 1;").is_empty());
    let errors = session.check("print this;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::E2005);
    assert_eq!(session.print_handler().output(), "");
}

#[test]
fn test_outcome_diagnostics() {
    let (_, outcome) = run("print ;");
    assert_eq!(outcome.diagnostics().len(), 1);
    assert!(matches!(outcome, RunOutcome::StaticError(_)));
    assert!(RunOutcome::Ok.diagnostics().is_empty());
}

#[test]
fn test_unused_local_warns_but_runs() {
    let source = "{ var unused = 1; print \"ran\"; }";
    let session = crate::common::session();
    let diagnostics = session.check(source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E2009);
    assert!(!diagnostics[0].is_error());

    assert_eq!(crate::common::output(source), "ran\n");
}

#[test]
fn test_warnings_are_dropped_from_static_errors() {
    let errors = static_errors("fun f() { var a; var a; }");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::E2002);
}
