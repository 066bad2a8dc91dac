//! Tree-walking interpreter.
//!
//! Executes a resolved [`CodeUnit`] against a chain of environments. Local
//! variable references use the hop counts recorded by the resolver; anything
//! the resolver left unrecorded is looked up in the globals.
//!
//! Statement execution reports early exits through [`ControlAction`]:
//! `Return` unwinds to the enclosing call, `Error` to `interpret`.

mod builder;
mod call;
mod expr;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use std::rc::Rc;

use lox_ir::{ExprId, FunctionRange, Ident, Name, SharedInterner, StmtId, StmtKind, StmtRange};
use lox_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    ClassValue, CodeUnit, ControlAction, Environment, EvalError, EvalErrorKind, EvalResult,
    FunctionValue, SharedPrintHandler, Value,
};

/// Default bound on nested calls before `Stack overflow.`.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Tree-walking interpreter.
///
/// Globals persist across [`Interpreter::interpret`] calls, so a REPL can
/// feed it one line at a time.
pub struct Interpreter {
    globals: Environment,
    /// Current scope.
    pub(crate) env: Environment,
    /// Unit whose arena the node ids currently being evaluated belong to.
    pub(crate) unit: Rc<CodeUnit>,
    interner: SharedInterner,
    print_handler: SharedPrintHandler,
    pub(crate) call_depth: usize,
    max_call_depth: usize,
}

impl Interpreter {
    /// An interpreter printing to stdout, with natives registered.
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Define a global binding by name.
    pub fn define_global(&self, name: &str, value: Value) {
        self.globals.define(self.interner.intern(name), value);
    }

    /// Run every top-level statement of `unit`, stopping at the first runtime
    /// error. Output printed before the error stands, as do global
    /// definitions made before it.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = unit.statements.len()))]
    pub fn interpret(&mut self, unit: Rc<CodeUnit>) -> Result<(), EvalError> {
        self.env = self.globals.clone();
        self.unit = Rc::clone(&unit);
        self.call_depth = 0;

        let result = self.run_statements(&unit.statements);
        self.print_handler.flush();

        match result {
            Ok(()) | Err(ControlAction::Return(_)) => Ok(()),
            Err(ControlAction::Error(error)) => {
                debug!(line = error.line, kind = ?error.kind, "runtime error");
                Err(*error)
            }
        }
    }

    fn run_statements(&mut self, stmts: &[StmtId]) -> Result<(), ControlAction> {
        for &stmt in stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    pub(crate) fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    pub(crate) fn undefined_variable(&self, ident: Ident) -> EvalError {
        EvalErrorKind::UndefinedVariable(self.name_str(ident.name).to_string()).at_line(ident.line)
    }

    /// Execute one statement.
    pub(crate) fn exec_stmt(&mut self, id: StmtId) -> Result<(), ControlAction> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(id))
    }

    fn exec_stmt_inner(&mut self, id: StmtId) -> Result<(), ControlAction> {
        let stmt = *self.unit.arena.get_stmt(id);
        match stmt.kind {
            StmtKind::Block(body) => {
                let env = Environment::with_enclosing(&self.env);
                self.exec_block(body, env)
            }
            StmtKind::Class {
                name,
                superclass,
                methods,
            } => self.exec_class(name, superclass, methods),
            StmtKind::Expression(expr) => {
                self.eval_expr(expr)?;
                Ok(())
            }
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            } => {
                let env = Environment::with_enclosing(&self.env);
                let mut scoped = self.scoped(env);
                if let Some(init) = init {
                    scoped.exec_stmt(init)?;
                }
                loop {
                    if let Some(condition) = condition {
                        if !scoped.eval_expr(condition)?.is_truthy() {
                            break;
                        }
                    }
                    scoped.exec_stmt(body)?;
                    if let Some(increment) = increment {
                        scoped.eval_expr(increment)?;
                    }
                }
                Ok(())
            }
            StmtKind::Function(function) => {
                let name = self.unit.arena.get_function(function).name.name;
                let value = FunctionValue::new(
                    Rc::from(self.name_str(name)),
                    function,
                    Rc::clone(&self.unit),
                    self.env.clone(),
                    false,
                );
                self.env.define(name, Value::Function(Rc::new(value)));
                Ok(())
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(condition)?.is_truthy() {
                    self.exec_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(())
                }
            }
            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(())
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Nil,
                };
                Err(ControlAction::Return(value))
            }
            StmtKind::Var { name, init } => {
                let value = match init {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Nil,
                };
                self.env.define(name.name, value);
                Ok(())
            }
            StmtKind::While { condition, body } => {
                while self.eval_expr(condition)?.is_truthy() {
                    self.exec_stmt(body)?;
                }
                Ok(())
            }
        }
    }

    /// Run `body` in `env`, restoring the current scope afterwards on every
    /// exit path.
    pub(crate) fn exec_block(
        &mut self,
        body: StmtRange,
        env: Environment,
    ) -> Result<(), ControlAction> {
        let unit = Rc::clone(&self.unit);
        let mut scoped = self.scoped(env);
        scoped.run_statements(unit.arena.get_stmt_list(body))
    }

    fn exec_class(
        &mut self,
        name: Ident,
        superclass: Option<ExprId>,
        methods: FunctionRange,
    ) -> Result<(), ControlAction> {
        let superclass = match superclass {
            Some(expr) => {
                let line = self.unit.arena.get_expr(expr).line;
                match self.eval_expr(expr)? {
                    Value::Class(class) => Some(class),
                    _ => return Err(EvalErrorKind::SuperclassNotAClass.at_line(line).into()),
                }
            }
            None => None,
        };

        self.env.define(name.name, Value::Nil);

        let method_env = match &superclass {
            Some(superclass) => {
                let env = Environment::with_enclosing(&self.env);
                env.define(Name::SUPER, Value::Class(Rc::clone(superclass)));
                env
            }
            None => self.env.clone(),
        };

        let unit = Rc::clone(&self.unit);
        let mut table = FxHashMap::default();
        for &method in unit.arena.get_function_list(methods) {
            let method_name = unit.arena.get_function(method).name.name;
            let function = FunctionValue::new(
                Rc::from(self.name_str(method_name)),
                method,
                Rc::clone(&unit),
                method_env.clone(),
                method_name == Name::INIT,
            );
            table.insert(method_name, Rc::new(function));
        }

        let class = ClassValue::new(Rc::from(self.name_str(name.name)), superclass, table);
        self.env
            .assign(name.name, Value::Class(Rc::new(class)))
            .map_err(|_| self.undefined_variable(name))?;
        Ok(())
    }

    /// Read a variable through its recorded hop count, or from the globals.
    pub(crate) fn look_up_variable(&self, expr: ExprId, ident: Ident) -> EvalResult {
        let found = match self.unit.table.get(expr) {
            Some(distance) => self.env.get_at(distance, ident.name),
            None => self.globals.get(ident.name),
        };
        found.map_err(|_| self.undefined_variable(ident))
    }
}
