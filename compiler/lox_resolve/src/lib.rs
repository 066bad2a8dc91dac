//! Static scope resolution.
//!
//! One pass over the parsed tree, before anything runs. For every variable
//! reference (`Variable`, `Assign`, `This`, `Super`) it records how many
//! enclosing scopes separate the reference from its declaration, so the
//! evaluator can jump straight to the right environment. References that
//! resolve to no local scope are globals and get no entry.
//!
//! The pass also enforces the static rules (no reading a local in its own
//! initializer, no top-level `return`, `this`/`super` only inside classes,
//! and so on). Errors are collected, never thrown; a program with any
//! resolution error must not be evaluated.

mod resolver;
mod scope_guard;

pub use resolver::Resolver;
pub use scope_guard::ScopedResolver;

use lox_diagnostic::Diagnostic;
use lox_ir::{ExprArena, ExprId, StmtId, StringInterner};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Scope-hop distances for local variable references, keyed by node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionTable {
    locals: FxHashMap<ExprId, usize>,
}

impl ResolutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hop count for a reference, or `None` for a global.
    #[inline]
    pub fn get(&self, expr: ExprId) -> Option<usize> {
        self.locals.get(&expr).copied()
    }

    pub(crate) fn insert(&mut self, expr: ExprId, depth: usize) {
        self.locals.insert(expr, depth);
    }

    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}

/// Resolver output.
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    pub table: ResolutionTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Whether any static error was found. Such a program must not run.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Resolve a parsed program.
#[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
pub fn resolve(
    arena: &ExprArena,
    statements: &[StmtId],
    interner: &StringInterner,
) -> Resolution {
    let mut resolver = Resolver::new(arena, interner);
    resolver.resolve_statements(statements);
    let resolution = resolver.finish();
    debug!(
        locals = resolution.table.len(),
        errors = resolution.diagnostics.len(),
        "resolved"
    );
    resolution
}
