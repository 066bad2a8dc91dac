//! Stack growth for the recursive phases.
//!
//! The parser, resolver, and evaluator all recurse once per nesting level of
//! the source program (and the evaluator once more per Lox call frame).
//! Wrapping those recursion points in [`ensure_sufficient_stack`] lets a
//! deeply nested expression or a deep recursive Lox program run on the heap
//! instead of overflowing the native stack. The evaluator still enforces its
//! own call-depth limit on top of this.
//!
//! - **Red zone**: 128KB; below this we grow
//! - **Growth size**: 2MB per segment

/// Minimum stack space to keep available.
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval_expr(&mut self, id: ExprId) -> Result<Value, EvalError> {
///     ensure_sufficient_stack(|| self.eval_expr_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
