use pretty_assertions::assert_eq;

use crate::common::output;

#[test]
fn test_recursive_fibonacci() {
    let source = "
fun fib(n) {
  if (n < 2) return n;
  return fib(n - 2) + fib(n - 1);
}
for (var i = 0; i < 8; i = i + 1) print fib(i);
";
    assert_eq!(output(source), "0\n1\n1\n2\n3\n5\n8\n13\n");
}

#[test]
fn test_closure_counters_are_independent() {
    let source = "
fun makeCounter() {
  var i = 0;
  fun count() {
    i = i + 1;
    print i;
  }
  return count;
}
var a = makeCounter();
var b = makeCounter();
a();
a();
b();
";
    assert_eq!(output(source), "1\n2\n1\n");
}

#[test]
fn test_closure_binds_at_declaration() {
    let source = "
var a = \"global\";
{
  fun showA() {
    print a;
  }
  showA();
  var a = \"block\";
  showA();
}
";
    assert_eq!(output(source), "global\nglobal\n");
}

#[test]
fn test_block_closure_keeps_inner_binding() {
    let source = "
var a = \"outer\";
var f;
{
  var a = \"inner\";
  fun g() {
    print a;
  }
  f = g;
}
f();
print a;
";
    assert_eq!(output(source), "inner\nouter\n");
}

#[test]
fn test_closure_shares_frame_with_its_call() {
    let source = "
fun make(v) {
  var x = v;
  fun show() {
    print x;
  }
  x = x + 100;
  return show;
}
var a = make(1);
var b = make(2);
a();
b();
";
    assert_eq!(output(source), "101\n102\n");
}

#[test]
fn test_functions_are_values() {
    let source = "
fun add(a, b) { return a + b; }
fun apply(f, x, y) { return f(x, y); }
print apply(add, 3, 4);
print add;
print clock;
";
    assert_eq!(output(source), "7\n<fn add>\n<native fn>\n");
}

#[test]
fn test_implicit_nil_return() {
    assert_eq!(output("fun f() {} print f();"), "nil\n");
    assert_eq!(output("fun g() { return; } print g();"), "nil\n");
}

#[test]
fn test_clock_is_a_number() {
    assert_eq!(output("print clock() > 0;"), "true\n");
}
