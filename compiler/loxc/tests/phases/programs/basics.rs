use pretty_assertions::assert_eq;

use crate::common::output;

#[test]
fn test_fibonacci_for_loop() {
    let source = "
var a = 0;
var temp;
for (var b = 1; a < 10; b = temp + b) {
  print a;
  temp = a;
  a = b;
}
";
    assert_eq!(output(source), "0\n1\n1\n2\n3\n5\n8\n");
}

#[test]
fn test_arithmetic_and_precedence() {
    assert_eq!(output("print 1 + 2 * 3 - 4 / 2;"), "5\n");
    assert_eq!(output("print (1 + 2) * 3;"), "9\n");
    assert_eq!(output("print -2 * -3;"), "6\n");
    assert_eq!(output("print 7 / 2;"), "3.5\n");
    assert_eq!(output("print 1 / 0;"), "inf\n");
}

#[test]
fn test_strings_and_equality() {
    assert_eq!(output("print \"foo\" + \"bar\";"), "foobar\n");
    assert_eq!(output("print \"a\" == \"a\";"), "true\n");
    assert_eq!(output("print 1 == \"1\";"), "false\n");
    assert_eq!(output("print nil == false;"), "false\n");
    assert_eq!(output("print !nil;"), "true\n");
}

#[test]
fn test_logical_operators_short_circuit() {
    let source = "
var calls = 0;
fun touch() { calls = calls + 1; return true; }
print false and touch();
print true or touch();
print nil or \"fallback\";
print calls;
";
    assert_eq!(output(source), "false\ntrue\nfallback\n0\n");
}

#[test]
fn test_block_scoping() {
    let source = "
var a = \"global a\";
var b = \"global b\";
{
  var a = \"outer a\";
  {
    var a = \"inner a\";
    print a;
    print b;
  }
  print a;
}
print a;
";
    assert_eq!(
        output(source),
        "inner a\nglobal b\nouter a\nglobal a\n"
    );
}

#[test]
fn test_while_and_if_else() {
    let source = "
var i = 0;
while (i < 5) {
  if (i == 2) print \"two\"; else print i;
  i = i + 1;
}
";
    assert_eq!(output(source), "0\n1\ntwo\n3\n4\n");
}

#[test]
fn test_comments_and_multiline_strings() {
    let source = "// leading comment
/* block
   comment */
print \"one
two\"; // trailing
";
    assert_eq!(output(source), "one\ntwo\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(output(""), "");
    assert_eq!(output("// nothing here\n"), "");
}
