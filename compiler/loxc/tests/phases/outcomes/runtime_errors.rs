use lox_diagnostic::ErrorCode;
use loxc::EX_SOFTWARE;
use pretty_assertions::assert_eq;

use crate::common::{run, runtime_error};

#[test]
fn test_output_before_error_stands() {
    let (out, error) = runtime_error("print \"before\";\nprint -\"x\";\nprint \"after\";");
    assert_eq!(out, "before\n");
    assert_eq!(error.to_string(), "Operand must be a number.\n[line 2]");
    assert_eq!(error.code, ErrorCode::E6001);
}

#[test]
fn test_runtime_error_exit_code() {
    let (_, outcome) = run("nil();");
    assert_eq!(outcome.exit_code(), EX_SOFTWARE);
}

#[test]
fn test_messages_and_lines() {
    let cases = [
        ("print 1 + \"a\";", "Operands must be two numbers or two strings.", 1),
        ("print 1 < true;", "Operands must be numbers.", 1),
        ("print undefinedThing;", "Undefined variable 'undefinedThing'.", 1),
        ("\nmissing = 1;", "Undefined variable 'missing'.", 2),
        ("\"str\"();", "Can only call functions and classes.", 1),
        ("class A {}\nprint A().nope;", "Undefined property 'nope'.", 2),
        ("var n = 1;\nprint n.field;", "Only instances have properties.", 2),
        ("var n = 1;\nn.field = 2;", "Only instances have fields.", 2),
        ("var NotClass = 1;\nclass B < NotClass {}", "Superclass must be a class.", 2),
    ];
    for (source, message, line) in cases {
        let (_, error) = runtime_error(source);
        assert_eq!(error.message, message, "{source}");
        assert_eq!(error.line, line, "{source}");
    }
}

#[test]
fn test_arity_mismatch_skips_body() {
    let source = "
fun f(a, b) { print \"ran\"; }
f(1);
";
    let (out, error) = runtime_error(source);
    assert_eq!(out, "");
    assert_eq!(error.message, "Expected 2 arguments but got 1.");
    assert_eq!(error.line, 3);
}

#[test]
fn test_class_arity_mismatch() {
    let (_, error) = runtime_error("class P { init(x) {} }\nP();");
    assert_eq!(error.message, "Expected 1 arguments but got 0.");
    let (_, error) = runtime_error("class Q {}\nQ(1);");
    assert_eq!(error.message, "Expected 0 arguments but got 1.");
}

#[test]
fn test_unbounded_recursion_overflows() {
    let (_, error) = runtime_error("fun f() { f(); }\nf();");
    assert_eq!(error.message, "Stack overflow.");
    assert_eq!(error.code, ErrorCode::E6008);
}
