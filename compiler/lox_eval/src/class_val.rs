//! Classes and instances.

use std::cell::RefCell;
use std::rc::Rc;

use lox_ir::Name;
use rustc_hash::FxHashMap;

use crate::{FunctionValue, Value};

/// A class: its name, optional superclass, and unbound methods.
#[derive(Debug)]
pub struct ClassValue {
    name: Rc<str>,
    superclass: Option<Rc<ClassValue>>,
    methods: FxHashMap<Name, Rc<FunctionValue>>,
}

impl ClassValue {
    pub fn new(
        name: Rc<str>,
        superclass: Option<Rc<ClassValue>>,
        methods: FxHashMap<Name, Rc<FunctionValue>>,
    ) -> Self {
        ClassValue {
            name,
            superclass,
            methods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass(&self) -> Option<&Rc<ClassValue>> {
        self.superclass.as_ref()
    }

    /// Find a method on this class or the nearest ancestor that defines it.
    pub fn find_method(&self, name: Name) -> Option<Rc<FunctionValue>> {
        let mut class = self;
        loop {
            if let Some(method) = class.methods.get(&name) {
                return Some(Rc::clone(method));
            }
            class = class.superclass.as_deref()?;
        }
    }

    /// Number of arguments a call to the class takes: the arity of `init`,
    /// or zero without one.
    pub fn arity(&self) -> usize {
        self.find_method(Name::INIT)
            .map_or(0, |init| init.arity())
    }
}

/// An instance: its class and its own fields.
#[derive(Debug)]
pub struct InstanceValue {
    class: Rc<ClassValue>,
    fields: RefCell<FxHashMap<Name, Value>>,
}

impl InstanceValue {
    pub fn new(class: Rc<ClassValue>) -> Self {
        InstanceValue {
            class,
            fields: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn class(&self) -> &Rc<ClassValue> {
        &self.class
    }

    /// Property read: a field if present, else a method bound to this
    /// instance. Fields shadow methods.
    pub fn get(self: &Rc<Self>, name: Name) -> Option<Value> {
        if let Some(value) = self.fields.borrow().get(&name) {
            return Some(value.clone());
        }
        let method = self.class.find_method(name)?;
        Some(Value::Function(Rc::new(method.bind(Rc::clone(self)))))
    }

    pub fn set(&self, name: Name, value: Value) {
        self.fields.borrow_mut().insert(name, value);
    }

    pub fn field_count(&self) -> usize {
        self.fields.borrow().len()
    }
}
