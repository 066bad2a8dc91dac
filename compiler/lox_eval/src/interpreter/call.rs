//! Calls: functions, natives, and class construction.

use std::rc::Rc;

use lox_ir::Name;

use super::Interpreter;
use crate::{
    ClassValue, ControlAction, Environment, EvalError, EvalErrorKind, EvalResult, FunctionValue,
    InstanceValue, Value,
};

impl Interpreter {
    /// Call `callee` with already-evaluated arguments. `line` is the line of
    /// the call's closing parenthesis.
    pub(crate) fn call_value(&mut self, callee: &Value, args: &[Value], line: u32) -> EvalResult {
        match callee {
            Value::Function(function) => {
                check_arity(function.arity(), args.len(), line)?;
                self.call_function(function, args, line)
            }
            Value::Native(native) => {
                check_arity(native.arity, args.len(), line)?;
                native.call(args).map_err(|kind| kind.at_line(line))
            }
            Value::Class(class) => {
                check_arity(class.arity(), args.len(), line)?;
                self.instantiate(class, args, line)
            }
            _ => Err(EvalErrorKind::NotCallable.at_line(line)),
        }
    }

    /// Run a user function's body in a fresh scope nested in its closure.
    ///
    /// A `return` inside the body stops here. Initializers always produce
    /// the bound `this`.
    #[tracing::instrument(level = "trace", skip_all, fields(function = function.name()))]
    pub(crate) fn call_function(
        &mut self,
        function: &FunctionValue,
        args: &[Value],
        line: u32,
    ) -> EvalResult {
        if self.call_depth >= self.max_call_depth() {
            return Err(EvalErrorKind::StackOverflow.at_line(line));
        }

        let unit = Rc::clone(function.unit());
        let decl = *function.decl();
        let env = Environment::with_enclosing(function.closure());
        for (param, value) in unit.arena.get_params(decl.params).iter().zip(args) {
            env.define(param.name, value.clone());
        }

        let outcome = {
            let mut scoped = self.scoped_call(env, Rc::clone(&unit));
            scoped.run_statements(unit.arena.get_stmt_list(decl.body))
        };

        let returned = match outcome {
            Ok(()) => Value::Nil,
            Err(ControlAction::Return(value)) => value,
            Err(ControlAction::Error(error)) => return Err(*error),
        };

        if function.is_initializer() {
            return function
                .closure()
                .get_at(0, Name::THIS)
                .map_err(|_| EvalErrorKind::UndefinedVariable("this".to_string()).at_line(line));
        }
        Ok(returned)
    }

    /// Construct an instance and run its initializer, if any.
    fn instantiate(&mut self, class: &Rc<ClassValue>, args: &[Value], line: u32) -> EvalResult {
        let instance = Rc::new(InstanceValue::new(Rc::clone(class)));
        if let Some(init) = class.find_method(Name::INIT) {
            let bound = init.bind(Rc::clone(&instance));
            self.call_function(&bound, args, line)?;
        }
        Ok(Value::Instance(instance))
    }
}

fn check_arity(expected: usize, got: usize, line: u32) -> Result<(), EvalError> {
    if expected == got {
        Ok(())
    } else {
        Err(EvalErrorKind::ArityMismatch { expected, got }.at_line(line))
    }
}
