#![allow(clippy::unwrap_used, clippy::expect_used)]

use lox_ir::{AstPrinter, ExprKind, StmtKind, StringInterner};
use pretty_assertions::assert_eq;

use crate::{parse, ParseOutput};

fn parse_source(source: &str, interner: &StringInterner) -> ParseOutput {
    let lexed = lox_lexer::lex(source, interner);
    assert!(!lexed.has_errors(), "unexpected lex errors: {:?}", lexed.errors);
    parse(&lexed.tokens, interner)
}

/// Parse and render as s-expressions, asserting there were no errors.
fn render(source: &str) -> String {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner);
    assert!(
        output.errors.is_empty(),
        "unexpected parse errors: {:?}",
        output.errors
    );
    AstPrinter::new(&output.arena, &interner).statements(&output.statements)
}

/// Parse and render the errors the way the CLI prints them.
fn errors(source: &str) -> Vec<String> {
    let interner = StringInterner::new();
    parse_source(source, &interner)
        .errors
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_precedence() {
    assert_eq!(render("print 1 + 2 * 3;"), "(print (+ 1 (* 2 3)))");
    assert_eq!(render("print (1 + 2) * 3;"), "(print (* (group (+ 1 2)) 3))");
    assert_eq!(render("print 1 - 2 - 3;"), "(print (- (- 1 2) 3))");
    assert_eq!(
        render("print 1 < 2 == 3 >= 4;"),
        "(print (== (< 1 2) (>= 3 4)))"
    );
    assert_eq!(render("print -!x;"), "(print (- (! x)))");
}

#[test]
fn test_logical_operators() {
    assert_eq!(
        render("print a or b and c;"),
        "(print (or a (and b c)))"
    );
}

#[test]
fn test_literals() {
    assert_eq!(
        render("print nil; print true; print false; print 1.5; print \"hi\";"),
        "(print nil)\n(print true)\n(print false)\n(print 1.5)\n(print \"hi\")"
    );
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(render("a = b = 1;"), "(expr (= a (= b 1)))");
}

#[test]
fn test_property_access_and_set() {
    assert_eq!(render("a.b.c = 1;"), "(expr (set (. a b) c 1))");
    assert_eq!(render("a.b(1, 2).c;"), "(expr (. (call (. a b) 1 2) c))");
}

#[test]
fn test_calls() {
    assert_eq!(render("f();"), "(expr (call f))");
    assert_eq!(render("f(1)(2);"), "(expr (call (call f 1) 2))");
}

#[test]
fn test_this_and_super() {
    assert_eq!(
        render("class A < B { m() { this.x = super.m(); } }"),
        "(class A < B (fun m () (expr (set this x (call (super m))))))"
    );
}

#[test]
fn test_declarations() {
    assert_eq!(
        render("var a; var b = 1; fun f(x, y) { return x; }"),
        "(var a)\n(var b 1)\n(fun f (x y) (return x))"
    );
    assert_eq!(render("fun g() { return; }"), "(fun g () (return))");
}

#[test]
fn test_control_flow() {
    assert_eq!(
        render("if (a) print 1; else print 2;"),
        "(if a (print 1) (print 2))"
    );
    assert_eq!(
        render("while (x) { x = x - 1; }"),
        "(while x (block (expr (= x (- x 1)))))"
    );
    assert_eq!(
        render("for (var i = 0; i < 3; i = i + 1) print i;"),
        "(for (var i 0) (< i 3) (= i (+ i 1)) (print i))"
    );
    assert_eq!(render("for (;;) print 1;"), "(for _ _ _ (print 1))");
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    assert_eq!(
        render("if (a) if (b) print 1; else print 2;"),
        "(if a (if b (print 1) (print 2)))"
    );
}

#[test]
fn test_call_line_is_closing_paren() {
    let interner = StringInterner::new();
    let output = parse_source("f(\n1,\n2\n);", &interner);
    let stmt = output.arena.get_stmt(output.statements[0]);
    let StmtKind::Expression(expr) = stmt.kind else {
        panic!("expected expression statement");
    };
    let call = output.arena.get_expr(expr);
    assert!(matches!(call.kind, ExprKind::Call { .. }));
    assert_eq!(call.line, 4);
}

#[test]
fn test_missing_expression() {
    assert_eq!(
        errors("print ;"),
        vec!["[line 1] Error at ';': Expect expression.".to_string()]
    );
}

#[test]
fn test_error_at_end() {
    assert_eq!(
        errors("print 1"),
        vec!["[line 1] Error at end: Expect ';' after value.".to_string()]
    );
}

#[test]
fn test_invalid_assignment_target_does_not_unwind() {
    let interner = StringInterner::new();
    let output = parse_source("a + b = c; print 1;", &interner);
    let messages: Vec<String> = output.errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec!["[line 1] Error at '=': Invalid assignment target.".to_string()]
    );
    // Both statements still parsed.
    assert_eq!(output.statements.len(), 2);
}

#[test]
fn test_recovery_reports_independent_errors() {
    let source = "var = 1;\nprint 2;\nfun (a) {}\nprint 3;";
    assert_eq!(
        errors(source),
        vec![
            "[line 1] Error at '=': Expect variable name.".to_string(),
            "[line 3] Error at '(': Expect function name.".to_string(),
        ]
    );
}

#[test]
fn test_recovery_keeps_following_statements() {
    let interner = StringInterner::new();
    let output = parse_source("print (1;\nprint 2;", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(
        AstPrinter::new(&output.arena, &interner).statements(&output.statements),
        "(print 2)"
    );
}

#[test]
fn test_class_errors() {
    assert_eq!(
        errors("class {}"),
        vec!["[line 1] Error at '{': Expect class name.".to_string()]
    );
    assert_eq!(
        errors("class A < {}"),
        vec!["[line 1] Error at '{': Expect superclass name.".to_string()]
    );
    assert_eq!(
        errors("class A { m }"),
        vec!["[line 1] Error at '}': Expect '(' after method name.".to_string()]
    );
}

#[test]
fn test_super_requires_method() {
    assert_eq!(
        errors("print super;"),
        vec!["[line 1] Error at ';': Expect '.' after 'super'.".to_string()]
    );
    assert_eq!(
        errors("print super.1;"),
        vec!["[line 1] Error at '1': Expect superclass method name.".to_string()]
    );
}

#[test]
fn test_unclosed_block() {
    assert_eq!(
        errors("{ print 1;"),
        vec!["[line 1] Error at end: Expect '}' after block.".to_string()]
    );
}

#[test]
fn test_too_many_arguments() {
    let args = vec!["1"; 256].join(", ");
    let source = format!("f({args});");
    assert_eq!(
        errors(&source),
        vec!["[line 1] Error at '1': Can't have more than 255 arguments.".to_string()]
    );

    let ok = format!("f({});", vec!["1"; 255].join(", "));
    assert!(errors(&ok).is_empty());
}

#[test]
fn test_too_many_parameters() {
    let params: Vec<String> = (0..256).map(|i| format!("p{i}")).collect();
    let source = format!("fun f({}) {{}}", params.join(", "));
    assert_eq!(
        errors(&source),
        vec!["[line 1] Error at 'p255': Can't have more than 255 parameters.".to_string()]
    );
}

#[test]
fn test_deeply_nested_expression() {
    let depth = 2_000;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
    let interner = StringInterner::new();
    let output = parse_source(&source, &interner);
    assert!(!output.has_errors());
    assert_eq!(output.statements.len(), 1);
}

#[test]
fn test_empty_program() {
    assert_eq!(render(""), "");
}
