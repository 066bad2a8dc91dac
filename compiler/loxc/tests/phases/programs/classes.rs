use pretty_assertions::assert_eq;

use crate::common::output;

#[test]
fn test_inherited_method_sees_subclass_instance() {
    let source = "
class A {
  m() { return this; }
}
class B < A {}
var b = B();
print b.m() == b;
print b.m();
";
    assert_eq!(output(source), "true\nB instance\n");
}

#[test]
fn test_super_binds_statically() {
    let source = "
class A {
  method() { print \"A method\"; }
}
class B < A {
  method() { print \"B method\"; }
  test() { super.method(); }
}
class C < B {}
C().test();
";
    assert_eq!(output(source), "A method\n");
}

#[test]
fn test_initializer_returns_this() {
    let source = "
class Foo {
  init(x) {
    this.x = x;
    return;
  }
}
var foo = Foo(1);
print foo.init(2) == foo;
print foo.x;
";
    assert_eq!(output(source), "true\n2\n");
}

#[test]
fn test_fields_and_bound_methods() {
    let source = "
class Person {
  init(name) { this.name = name; }
  greet() { print \"Hi, \" + this.name; }
}
var greet = Person(\"Ada\").greet;
greet();
var p = Person(\"Bob\");
p.name = \"Cy\";
p.greet();
print Person;
";
    assert_eq!(output(source), "Hi, Ada\nHi, Cy\nPerson\n");
}

#[test]
fn test_class_arity_follows_init() {
    let source = "
class Point {
  init(x, y) { this.x = x; this.y = y; }
}
var p = Point(1, 2);
print p.x + p.y;
";
    assert_eq!(output(source), "3\n");
}
