//! Environments: chains of name-to-value scopes.
//!
//! Every block, call, method binding and subclass body gets its own scope
//! whose `enclosing` link points at the scope it was created in. Closures
//! capture the scope they were declared in, so scopes are shared and can
//! outlive the frame that created them.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lox_ir::Name;
use rustc_hash::FxHashMap;

use crate::Value;

/// Single-threaded shared cell.
///
/// Wraps `Rc<RefCell<T>>` so scopes are only ever created through
/// [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One scope: its own bindings plus the scope it is nested in.
#[derive(Default)]
pub struct Scope {
    values: FxHashMap<Name, Value>,
    enclosing: Option<Environment>,
}

/// No scope on the searched path binds the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndefinedBinding;

/// Handle to a scope. Cloning shares the scope.
#[derive(Clone, Default)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A root scope with no enclosing scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh scope nested in `parent`.
    pub fn with_enclosing(parent: &Environment) -> Self {
        Environment(LocalScope::new(Scope {
            values: FxHashMap::default(),
            enclosing: Some(parent.clone()),
        }))
    }

    pub fn enclosing(&self) -> Option<Environment> {
        self.0.borrow().enclosing.clone()
    }

    /// Bind `name` in this scope, replacing any existing binding.
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().values.insert(name, value);
    }

    /// Look `name` up here, then along the enclosing chain.
    pub fn get(&self, name: Name) -> Result<Value, UndefinedBinding> {
        let mut current = self.clone();
        loop {
            let next = {
                let scope = current.0.borrow();
                if let Some(value) = scope.values.get(&name) {
                    return Ok(value.clone());
                }
                scope.enclosing.clone()
            };
            current = next.ok_or(UndefinedBinding)?;
        }
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn assign(&self, name: Name, value: Value) -> Result<(), UndefinedBinding> {
        let mut current = self.clone();
        loop {
            let next = {
                let mut scope = current.0.borrow_mut();
                if let Some(slot) = scope.values.get_mut(&name) {
                    *slot = value;
                    return Ok(());
                }
                scope.enclosing.clone()
            };
            current = next.ok_or(UndefinedBinding)?;
        }
    }

    /// The scope exactly `distance` links up the chain.
    pub fn ancestor(&self, distance: usize) -> Option<Environment> {
        let mut current = self.clone();
        for _ in 0..distance {
            current = current.enclosing()?;
        }
        Some(current)
    }

    /// Read `name` from the scope `distance` links up, without searching.
    pub fn get_at(&self, distance: usize, name: Name) -> Result<Value, UndefinedBinding> {
        let scope = self.ancestor(distance).ok_or(UndefinedBinding)?;
        let value = scope.0.borrow().values.get(&name).cloned();
        value.ok_or(UndefinedBinding)
    }

    /// Write `name` in the scope `distance` links up, without searching.
    pub fn assign_at(
        &self,
        distance: usize,
        name: Name,
        value: Value,
    ) -> Result<(), UndefinedBinding> {
        let scope = self.ancestor(distance).ok_or(UndefinedBinding)?;
        let mut scope = scope.0.borrow_mut();
        match scope.values.get_mut(&name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(UndefinedBinding),
        }
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Number of bindings in this scope alone.
    pub fn len(&self) -> usize {
        self.0.borrow().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().values.is_empty()
    }

    /// Number of links from this scope to the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.enclosing();
        while let Some(env) = current {
            depth += 1;
            current = env.enclosing();
        }
        depth
    }
}

// Scopes can be cyclic through closures stored in them, so only a summary.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.len())
            .field("depth", &self.depth())
            .finish()
    }
}
