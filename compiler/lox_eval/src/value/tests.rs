#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::rc::Rc;

use lox_ir::StringInterner;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

use crate::{ClassValue, InstanceValue, NativeFunction, Value};

fn class(name: &str, superclass: Option<Rc<ClassValue>>) -> Rc<ClassValue> {
    Rc::new(ClassValue::new(Rc::from(name), superclass, FxHashMap::default()))
}

#[test]
fn test_truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::from("").is_truthy());
}

#[test]
fn test_scalar_equality() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_eq!(Value::Number(1.0), Value::Number(1.0));
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_eq!(Value::from("ab"), Value::string(String::from("ab")));
    assert_ne!(Value::from("1"), Value::Number(1.0));
}

#[test]
fn test_object_equality_is_identity() {
    let a = class("A", None);
    assert_eq!(Value::Class(Rc::clone(&a)), Value::Class(Rc::clone(&a)));
    assert_ne!(Value::Class(a), Value::Class(class("A", None)));

    let k = class("K", None);
    let one = Rc::new(InstanceValue::new(Rc::clone(&k)));
    let two = Rc::new(InstanceValue::new(k));
    assert_eq!(Value::Instance(Rc::clone(&one)), Value::Instance(one));
    assert_ne!(
        Value::Instance(two),
        Value::Instance(Rc::new(InstanceValue::new(class("K", None))))
    );
}

#[test]
fn test_number_display() {
    assert_eq!(Value::Number(2.0).to_string(), "2");
    assert_eq!(Value::Number(-0.0).to_string(), "-0");
    assert_eq!(Value::Number(678.098).to_string(), "678.098");
    assert_eq!(Value::Number(-16.9).to_string(), "-16.9");
    assert_eq!(Value::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
}

#[test]
fn test_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::from("raw text").to_string(), "raw text");

    let native = NativeFunction::new("clock", 0, |_| Ok(Value::Nil));
    assert_eq!(Value::Native(Rc::new(native)).to_string(), "<native fn>");

    let bagel = class("Bagel", None);
    assert_eq!(Value::Class(Rc::clone(&bagel)).to_string(), "Bagel");
    let instance = InstanceValue::new(bagel);
    assert_eq!(Value::Instance(Rc::new(instance)).to_string(), "Bagel instance");
}

#[test]
fn test_instance_fields() {
    let interner = StringInterner::new();
    let field = interner.intern("x");
    let instance = Rc::new(InstanceValue::new(class("P", None)));

    assert_eq!(instance.get(field), None);
    instance.set(field, Value::Number(3.0));
    assert_eq!(instance.get(field), Some(Value::Number(3.0)));
    assert_eq!(instance.field_count(), 1);
}

#[test]
fn test_find_method_without_methods() {
    let interner = StringInterner::new();
    let base = class("Base", None);
    let derived = class("Derived", Some(Rc::clone(&base)));
    assert!(derived.find_method(interner.intern("m")).is_none());
    assert_eq!(derived.arity(), 0);
    assert_eq!(derived.superclass().map(|c| c.name()), Some("Base"));
}
