//! Callable values: user functions (closures) and native functions.

use std::fmt;
use std::rc::Rc;

use lox_ir::{FunctionDecl, FunctionId, Name};

use crate::{CodeUnit, Environment, EvalErrorKind, InstanceValue, Value};

/// A user-defined function or method together with the scope it closes over.
///
/// Immutable once built. [`FunctionValue::bind`] produces a new value rather
/// than modifying this one.
#[derive(Clone)]
pub struct FunctionValue {
    name: Rc<str>,
    decl: FunctionId,
    /// The unit whose arena holds `decl`.
    unit: Rc<CodeUnit>,
    closure: Environment,
    is_initializer: bool,
}

impl FunctionValue {
    pub fn new(
        name: Rc<str>,
        decl: FunctionId,
        unit: Rc<CodeUnit>,
        closure: Environment,
        is_initializer: bool,
    ) -> Self {
        FunctionValue {
            name,
            decl,
            unit,
            closure,
            is_initializer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decl(&self) -> &FunctionDecl {
        self.unit.arena.get_function(self.decl)
    }

    pub fn unit(&self) -> &Rc<CodeUnit> {
        &self.unit
    }

    pub fn closure(&self) -> &Environment {
        &self.closure
    }

    pub fn is_initializer(&self) -> bool {
        self.is_initializer
    }

    pub fn arity(&self) -> usize {
        self.decl().arity()
    }

    /// A copy of this method whose closure is a fresh scope binding `this`
    /// to `instance`.
    pub fn bind(&self, instance: Rc<InstanceValue>) -> FunctionValue {
        let closure = Environment::with_enclosing(&self.closure);
        closure.define(Name::THIS, Value::Instance(instance));
        FunctionValue {
            closure,
            ..self.clone()
        }
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("decl", &self.decl)
            .field("is_initializer", &self.is_initializer)
            .finish_non_exhaustive()
    }
}

/// Signature of a native function body.
pub type NativeFn = fn(&[Value]) -> Result<Value, EvalErrorKind>;

/// A function implemented in Rust.
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn new(name: &'static str, arity: usize, func: NativeFn) -> Self {
        NativeFunction { name, arity, func }
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> Result<Value, EvalErrorKind> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
