//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for expressions, statements, and functions
//! - Child lists stored in flattened side tables and addressed by ranges
//! - Bulk deallocation when the last owner drops the arena

use crate::ast::{
    Expr, ExprId, ExprRange, FunctionDecl, FunctionId, FunctionRange, Ident, ParamRange, Stmt,
    StmtId, StmtRange,
};

/// Convert an arena length to a `u32` index, saturating like token spans do.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Contiguous storage for one parsed program.
///
/// Lists (call arguments, block bodies, parameters, class methods) are
/// pushed contiguously at the end of their side table, so a parser that
/// collects children into a local `Vec` first can nest freely.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
    functions: Vec<FunctionDecl>,
    function_lists: Vec<FunctionId>,
    params: Vec<Ident>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 expression per 8 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_exprs = source_len / 8;
        ExprArena {
            exprs: Vec::with_capacity(estimated_exprs),
            expr_lists: Vec::with_capacity(estimated_exprs / 4),
            stmts: Vec::with_capacity(estimated_exprs / 3),
            stmt_lists: Vec::with_capacity(estimated_exprs / 3),
            functions: Vec::new(),
            function_lists: Vec::new(),
            params: Vec::new(),
        }
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        ExprRange::new(start, to_u32(self.expr_lists.len()) - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // ===== Statements =====

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    /// Get statement by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_u32(self.stmt_lists.len());
        self.stmt_lists.extend(stmts);
        StmtRange::new(start, to_u32(self.stmt_lists.len()) - start)
    }

    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len()]
    }

    // ===== Functions =====

    #[inline]
    pub fn alloc_function(&mut self, function: FunctionDecl) -> FunctionId {
        let id = FunctionId::new(to_u32(self.functions.len()));
        self.functions.push(function);
        id
    }

    /// Get function declaration by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    #[track_caller]
    pub fn get_function(&self, id: FunctionId) -> &FunctionDecl {
        &self.functions[id.index()]
    }

    pub fn alloc_function_list(
        &mut self,
        functions: impl IntoIterator<Item = FunctionId>,
    ) -> FunctionRange {
        let start = to_u32(self.function_lists.len());
        self.function_lists.extend(functions);
        FunctionRange::new(start, to_u32(self.function_lists.len()) - start)
    }

    #[inline]
    pub fn get_function_list(&self, range: FunctionRange) -> &[FunctionId] {
        let start = range.start as usize;
        &self.function_lists[start..start + range.len()]
    }

    // ===== Parameters =====

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Ident>) -> ParamRange {
        let start = to_u32(self.params.len());
        self.params.extend(params);
        ParamRange::new(start, to_u32(self.params.len()) - start)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Ident] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }
}
