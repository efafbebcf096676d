//! Opaque host objects and the clone capabilities they may expose.
//!
//! The cloner discovers capabilities through interface satisfaction: a host
//! object opts in by returning itself from [`HostObject::as_cloneable`] or
//! [`HostObject::as_tree_node`].

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use super::Value;

/// How far a delegated clone should reach.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CloneMode {
    /// Copy only the top-level value.
    Shallow,
    /// Copy the value and everything it owns.
    Deep,
}

/// A value that knows how to copy itself.
pub trait Cloneable {
    /// Produce a copy of `self`. The result is used verbatim.
    fn clone_with(&self, mode: CloneMode) -> Value;
}

/// A node of an external tree (for example a document model) that offers
/// its own node-cloning routine.
pub trait TreeNode {
    /// Clone this node, including descendants when `deep` is set.
    fn clone_node(&self, deep: bool) -> Value;
}

/// An object owned by the embedding program.
pub trait HostObject: Any + fmt::Debug {
    /// Short name used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Self-describing clone capability.
    fn as_cloneable(&self) -> Option<&dyn Cloneable> {
        None
    }

    /// External-tree clone capability.
    fn as_tree_node(&self) -> Option<&dyn TreeNode> {
        None
    }
}

/// Shared handle to a [`HostObject`].
#[derive(Clone)]
pub struct Host(Rc<dyn HostObject>);

impl Host {
    /// Wrap `object` in a new handle.
    #[must_use]
    pub fn new(object: impl HostObject) -> Self {
        Self(Rc::new(object))
    }

    /// Borrow the wrapped object.
    #[must_use]
    pub fn object(&self) -> &dyn HostObject {
        &*self.0
    }

    /// Downcast the wrapped object to a concrete type.
    #[must_use]
    pub fn downcast_ref<T: HostObject>(&self) -> Option<&T> {
        let any: &dyn Any = &*self.0;
        any.downcast_ref::<T>()
    }

    /// Returns `true` when both handles point at the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Host").field(&self.0).finish()
    }
}
