//! A resolved program ready to run.

use lox_ir::{ExprArena, StmtId};
use lox_resolve::ResolutionTable;

/// An arena, its top-level statements, and the resolution table computed
/// for it. Frozen once built; function values keep their unit alive so
/// their bodies stay reachable after the unit that declared them finishes.
#[derive(Debug, Default)]
pub struct CodeUnit {
    pub arena: ExprArena,
    pub statements: Vec<StmtId>,
    pub table: ResolutionTable,
}

impl CodeUnit {
    pub fn new(arena: ExprArena, statements: Vec<StmtId>, table: ResolutionTable) -> Self {
        CodeUnit {
            arena,
            statements,
            table,
        }
    }
}
