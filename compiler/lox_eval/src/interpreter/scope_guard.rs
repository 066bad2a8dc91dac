//! RAII scope guards for the interpreter.
//!
//! [`ScopedInterpreter`] swaps in a new current scope (and, for calls, the
//! callee's code unit) and puts the previous ones back when dropped. Early
//! exits through `?`, including `return` unwinding, leave the interpreter
//! exactly as it was before the block or call.

use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use super::Interpreter;
use crate::{CodeUnit, Environment};

/// Guard over an interpreter running in a temporary scope.
///
/// Derefs to [`Interpreter`].
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    saved_env: Option<Environment>,
    saved_unit: Option<Rc<CodeUnit>>,
    is_call: bool,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        if let Some(env) = self.saved_env.take() {
            self.interpreter.env = env;
        }
        if let Some(unit) = self.saved_unit.take() {
            self.interpreter.unit = unit;
        }
        if self.is_call {
            self.interpreter.call_depth = self.interpreter.call_depth.saturating_sub(1);
        }
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Make `env` the current scope until the guard drops.
    pub fn scoped(&mut self, env: Environment) -> ScopedInterpreter<'_> {
        let saved = std::mem::replace(&mut self.env, env);
        ScopedInterpreter {
            interpreter: self,
            saved_env: Some(saved),
            saved_unit: None,
            is_call: false,
        }
    }

    /// Enter a call frame: `env` becomes the current scope, `unit` the
    /// current code unit, and the call depth goes up by one.
    pub(crate) fn scoped_call(&mut self, env: Environment, unit: Rc<CodeUnit>) -> ScopedInterpreter<'_> {
        let saved_env = std::mem::replace(&mut self.env, env);
        let saved_unit = std::mem::replace(&mut self.unit, unit);
        self.call_depth += 1;
        ScopedInterpreter {
            interpreter: self,
            saved_env: Some(saved_env),
            saved_unit: Some(saved_unit),
            is_call: true,
        }
    }
}
