//! Lexically scoped environments.
//!
//! An [`Environment`] is a handle to one frame of bindings. Frames link to
//! their parent, forming a tree: the root frame holds the builtins and the
//! top-level declarations, each call adds a child of the callee's closure
//! frame. A frame stays alive while any handle refers to it, including a
//! function value that captured it.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use quill_ir::Name;

use crate::Value;

/// Whether a binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// Declared with `let`, or a function parameter.
    Mutable,
    /// Declared with `const` or `function`, or a builtin.
    Constant,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// The name is already bound in the target frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyDeclared;

/// Why [`Environment::assign`] failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// The nearest binding is constant.
    Constant,
    /// No frame binds the name.
    Undefined,
}

/// Single-threaded shared ownership with interior mutability.
///
/// All frames are allocated through [`LocalScope::new`]; frames are shared
/// between a call, its nested frames and any closures created during it.
#[repr(transparent)]
pub(crate) struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same allocation.
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

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// One frame: its own bindings plus a link to the enclosing frame.
#[derive(Debug, Default)]
pub(crate) struct Scope {
    bindings: FxHashMap<Name, Binding>,
    parent: Option<LocalScope<Scope>>,
}

#[derive(Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

impl Scope {
    fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding.value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(binding) = self.bindings.get_mut(name) {
            if !binding.mutability.is_mutable() {
                return Err(AssignError::Constant);
            }
            binding.value = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(AssignError::Undefined),
        }
    }
}

/// A handle to a frame. Cloning the handle shares the frame.
#[derive(Clone, Debug)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A new root frame with no bindings.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A new empty frame whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    /// The enclosing frame, if this is not a root.
    #[cfg(test)]
    pub(crate) fn parent(&self) -> Option<Environment> {
        let parent = self.scope.borrow().parent.clone()?;
        Some(Environment { scope: parent })
    }

    /// Bind `name` in this frame.
    ///
    /// Fails if this frame already binds it; shadowing a binding from an
    /// enclosing frame is allowed.
    pub fn declare(
        &self,
        name: Name,
        value: Value,
        mutability: Mutability,
    ) -> Result<(), AlreadyDeclared> {
        let mut scope = self.scope.borrow_mut();
        if scope.bindings.contains_key(&name) {
            return Err(AlreadyDeclared);
        }
        scope.bindings.insert(name, Binding { value, mutability });
        Ok(())
    }

    /// Bind `name` in this frame, replacing any existing binding here.
    ///
    /// Used to install host bindings; user code goes through [`declare`].
    ///
    /// [`declare`]: Environment::declare
    pub fn define(&self, name: Name, value: Value, mutability: Mutability) {
        self.scope
            .borrow_mut()
            .bindings
            .insert(name, Binding { value, mutability });
    }

    /// Overwrite the nearest binding of `name`.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), AssignError> {
        self.scope.borrow_mut().assign(name, value)
    }

    /// The value of the nearest binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// Whether this frame itself binds `name`, ignoring enclosing frames.
    #[cfg(test)]
    pub(crate) fn is_declared_here(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Mutability of the nearest binding of `name`.
    #[cfg(test)]
    pub(crate) fn mutability(&self, name: &str) -> Option<Mutability> {
        let scope = self.scope.borrow();
        if let Some(binding) = scope.bindings.get(name) {
            return Some(binding.mutability);
        }
        let parent = Environment {
            scope: scope.parent.clone()?,
        };
        drop(scope);
        parent.mutability(name)
    }

    /// Live handles to this frame, including those held by function values.
    #[cfg(test)]
    pub(crate) fn handle_count(&self) -> usize {
        Rc::strong_count(&self.scope.0)
    }

    /// Whether both handles refer to the same frame.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
