//! RAII scope guard for the resolver.
//!
//! [`ScopedResolver`] pops the scope it pushed when dropped, so every exit
//! path out of a block, function body, or class body leaves the scope stack
//! balanced, errors included.

use std::ops::{Deref, DerefMut};

use crate::Resolver;

/// Guard over a resolver with one extra scope pushed.
///
/// Derefs to [`Resolver`]; the scope is popped on drop.
pub struct ScopedResolver<'guard, 'a> {
    resolver: &'guard mut Resolver<'a>,
}

impl Drop for ScopedResolver<'_, '_> {
    fn drop(&mut self) {
        self.resolver.end_scope();
    }
}

impl<'a> Deref for ScopedResolver<'_, 'a> {
    type Target = Resolver<'a>;

    fn deref(&self) -> &Self::Target {
        self.resolver
    }
}

impl DerefMut for ScopedResolver<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.resolver
    }
}

impl<'a> Resolver<'a> {
    /// Push a scope, returning a guard that pops it on drop.
    pub fn scoped(&mut self) -> ScopedResolver<'_, 'a> {
        self.begin_scope();
        ScopedResolver { resolver: self }
    }

    /// Run `f` inside a fresh scope.
    pub fn with_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedResolver<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
