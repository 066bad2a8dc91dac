//! A compile-and-run session.

use std::rc::Rc;

use lox_diagnostic::Diagnostic;
use lox_eval::{CodeUnit, Interpreter, InterpreterBuilder, SharedPrintHandler};
use lox_ir::SharedInterner;
use tracing::debug;

use crate::{EX_DATAERR, EX_SOFTWARE};

/// How running one piece of source ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Ok,
    /// Lex, parse or resolve errors; nothing was executed.
    StaticError(Vec<Diagnostic>),
    /// Execution stopped at this error. Earlier output and global
    /// definitions stand.
    RuntimeError(Diagnostic),
}

impl RunOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, RunOutcome::Ok)
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Ok => 0,
            RunOutcome::StaticError(_) => EX_DATAERR,
            RunOutcome::RuntimeError(_) => EX_SOFTWARE,
        }
    }

    /// Every diagnostic this outcome carries.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            RunOutcome::Ok => &[],
            RunOutcome::StaticError(diagnostics) => diagnostics,
            RunOutcome::RuntimeError(diagnostic) => std::slice::from_ref(diagnostic),
        }
    }
}

/// Owns the interner and interpreter shared by every run, so names and
/// globals from one run are visible to the next (one REPL line to the next).
pub struct Session {
    interner: SharedInterner,
    interpreter: Interpreter,
}

impl Session {
    pub fn new(print_handler: SharedPrintHandler) -> Self {
        let interner = SharedInterner::new();
        let interpreter = InterpreterBuilder::new(interner.clone())
            .print_handler(print_handler)
            .build();
        Session {
            interner,
            interpreter,
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        self.interpreter.print_handler()
    }

    /// Lex, parse and resolve `source`, returning the unit when there were
    /// no errors, plus every diagnostic including warnings.
    ///
    /// Lexer and parser errors are reported together; the resolver only
    /// runs on a program that parsed cleanly.
    pub fn analyze(&self, source: &str) -> (Option<CodeUnit>, Vec<Diagnostic>) {
        let lexed = lox_lexer::lex(source, &self.interner);
        let parsed = lox_parse::parse(&lexed.tokens, &self.interner);
        if lexed.has_errors() || parsed.has_errors() {
            let mut errors = lexed.errors;
            errors.extend(parsed.errors);
            return (None, errors);
        }

        let resolution = lox_resolve::resolve(&parsed.arena, &parsed.statements, &self.interner);
        if resolution.has_errors() {
            return (None, resolution.diagnostics);
        }
        let unit = CodeUnit::new(parsed.arena, parsed.statements, resolution.table);
        (Some(unit), resolution.diagnostics)
    }

    /// A runnable unit, or the errors that prevent running. Warnings are
    /// dropped.
    pub fn compile(&self, source: &str) -> Result<CodeUnit, Vec<Diagnostic>> {
        match self.analyze(source) {
            (Some(unit), _) => Ok(unit),
            (None, mut diagnostics) => {
                diagnostics.retain(Diagnostic::is_error);
                Err(diagnostics)
            }
        }
    }

    /// Every static diagnostic for `source`, without running it.
    pub fn check(&self, source: &str) -> Vec<Diagnostic> {
        self.analyze(source).1
    }

    /// Compile and execute `source`.
    pub fn run(&mut self, source: &str) -> RunOutcome {
        let unit = match self.compile(source) {
            Ok(unit) => unit,
            Err(errors) => {
                debug!(errors = errors.len(), "static errors, not running");
                return RunOutcome::StaticError(errors);
            }
        };
        match self.interpreter.interpret(Rc::new(unit)) {
            Ok(()) => RunOutcome::Ok,
            Err(error) => RunOutcome::RuntimeError(error.to_diagnostic()),
        }
    }
}
