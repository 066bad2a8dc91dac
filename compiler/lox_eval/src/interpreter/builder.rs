//! `InterpreterBuilder` for configuring an [`Interpreter`].

use std::rc::Rc;

use lox_ir::SharedInterner;

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::natives::register_natives;
use crate::{stdout_handler, CodeUnit, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, a call depth limit of
/// [`DEFAULT_MAX_CALL_DEPTH`], natives registered.
pub struct InterpreterBuilder {
    interner: SharedInterner,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
    natives: bool,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder {
            interner,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            natives: true,
        }
    }

    /// Where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Nested calls allowed before a call fails with `Stack overflow.`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Whether to define the built-in functions (`clock`) in the globals.
    #[must_use]
    pub fn with_natives(mut self, natives: bool) -> Self {
        self.natives = natives;
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = Environment::new();
        if self.natives {
            register_natives(&globals, &self.interner);
        }
        Interpreter {
            env: globals.clone(),
            globals,
            unit: Rc::new(CodeUnit::default()),
            interner: self.interner,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}
