//! Built-in functions available in the global scope.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use lox_ir::StringInterner;

use crate::{Environment, EvalErrorKind, NativeFunction, Value};

/// `clock()`: wall-clock milliseconds since the Unix epoch.
fn clock(_args: &[Value]) -> Result<Value, EvalErrorKind> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0);
    Ok(Value::Number(millis))
}

/// Every native, as `(name, arity, body)`.
const NATIVES: &[(&str, usize, crate::NativeFn)] = &[("clock", 0, clock)];

/// Define all natives in `globals`.
pub fn register_natives(globals: &Environment, interner: &StringInterner) {
    for &(name, arity, func) in NATIVES {
        let native = NativeFunction::new(name, arity, func);
        globals.define(interner.intern(name), Value::Native(Rc::new(native)));
    }
}
