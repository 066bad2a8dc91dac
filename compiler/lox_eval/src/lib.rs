//! Tree-walking evaluator for Lox.
//!
//! Runs a resolved [`CodeUnit`]: environments hold variables, closures
//! capture the environment they were declared in, and classes dispatch
//! methods along a single-inheritance chain.
//!
//! Typical use:
//!
//! ```text
//! let mut interpreter = InterpreterBuilder::new(interner.clone())
//!     .print_handler(buffer_handler())
//!     .build();
//! interpreter.interpret(Rc::new(unit))?;
//! ```

mod class_val;
mod code_unit;
mod environment;
mod errors;
mod function_val;
pub mod interpreter;
mod natives;
mod operators;
mod print_handler;
mod value;

pub use class_val::{ClassValue, InstanceValue};
pub use code_unit::CodeUnit;
pub use environment::{Environment, LocalScope, Scope, UndefinedBinding};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult, OperandRule, PropertyAccess};
pub use function_val::{FunctionValue, NativeFn, NativeFunction};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH};
pub use natives::register_natives;
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use value::Value;
