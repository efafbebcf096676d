//! Deep, cycle-safe, type-aware copying.
//!
//! [`Cloner::deep_copy`] walks a value graph and produces an independent
//! copy. The rules, in order:
//!
//! 1. scalars are returned as they are;
//! 2. a composite reached before in the same call resolves to the copy made
//!    for it, so cycles in the source become cycles in the copy;
//! 3. values exposing [`crate::Cloneable`] copy themselves and the result is used
//!    verbatim;
//! 4. dates and patterns are rebuilt from their instant or source and flags,
//!    and external tree nodes are cloned through [`crate::TreeNode`];
//! 5. records and arrays are rebuilt field by field.
//!
//! Attributes are not preserved by rule 5: every copied property is
//! enumerable, writable, and configurable. Inherited enumerable properties
//! become own properties of the copy.

mod visited;

use crate::Realm;
use crate::realm::{CONSTRUCTOR_KEY, PROTOTYPE_KEY};
use crate::value::{Array, CloneMode, Date, Host, Record, Value};

use visited::Visited;

/// Deep-copy operations bound to a realm.
#[derive(Clone, Copy, Debug)]
pub struct Cloner<'r> {
    realm: &'r Realm,
}

impl<'r> Cloner<'r> {
    /// Bind a cloner to `realm`.
    #[must_use]
    pub const fn new(realm: &'r Realm) -> Self {
        Self { realm }
    }

    /// Produce a deep copy of `value`.
    ///
    /// Each call uses a fresh visited map that is discarded on return.
    /// Very deep acyclic graphs are not protected against stack exhaustion.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpleoo::{Capabilities, Realm, Value};
    ///
    /// let realm = Realm::with_capabilities(Capabilities::FULL);
    /// let inner = realm.record_from([("b", Value::from(1))]);
    /// let rec = realm.record_from([("a", Value::from(&inner))]);
    ///
    /// let copy = realm.deep_copy(&Value::from(&rec));
    /// let copied_inner = copy.as_record().and_then(|r| r.get_own("a"));
    /// assert!(copied_inner.as_ref().is_some_and(|a| *a != Value::from(&inner)));
    /// assert_eq!(
    ///     copied_inner.and_then(|a| a.as_record().map(|r| r.get("b"))),
    ///     Some(Value::from(1))
    /// );
    /// ```
    #[must_use]
    pub fn deep_copy(&self, value: &Value) -> Value {
        let mut visited = Visited::default();
        let copy = self.copy_value(value, &mut visited);
        tracing::trace!(composites = visited.len(), "deep copy finished");
        copy
    }

    fn copy_value(&self, value: &Value, visited: &mut Visited) -> Value {
        if !value.is_composite() {
            return value.clone();
        }
        if let Some(copy) = visited.get(value) {
            return copy;
        }
        if let Some(copy) = delegate(value) {
            return remember(visited, value, copy);
        }
        match value {
            Value::Date(date) => remember(visited, value, Date::new(date.instant()).into()),
            Value::Pattern(pattern) => remember(visited, value, pattern.duplicate().into()),
            Value::Record(record) => self.copy_record(value, record, visited),
            Value::Array(array) => self.copy_array(value, array, visited),
            Value::Host(host) => copy_host(value, host, visited),
            Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                value.clone()
            }
        }
    }

    fn copy_record(&self, original: &Value, record: &Record, visited: &mut Visited) -> Value {
        let prototype = self.resolve_prototype(record);
        let copy = match record.callable() {
            Some(callable) => Record::with_callable(prototype, callable),
            None => Record::new(prototype),
        };
        visited.insert(original, &Value::from(&copy));
        for name in record.enumerable_keys() {
            let field = record.get(&name);
            let copied = self.copy_value(&field, visited);
            copy.set(&name, copied);
        }
        Value::Record(copy)
    }

    fn copy_array(&self, original: &Value, array: &Array, visited: &mut Visited) -> Value {
        let copy = Array::new();
        visited.insert(original, &Value::from(copy.clone()));
        for item in array.to_vec() {
            copy.push(self.copy_value(&item, visited));
        }
        Value::Array(copy)
    }

    /// Identity link for the copy of `record`: read directly when the host
    /// supports introspection, else taken from the looked-up constructor's
    /// `prototype`, else none.
    fn resolve_prototype(&self, record: &Record) -> Option<Record> {
        if self.realm.capabilities().prototype_introspection {
            return record.prototype();
        }
        let fallback = record
            .lookup(CONSTRUCTOR_KEY)
            .and_then(Value::into_record)
            .and_then(|constructor| constructor.get_own(PROTOTYPE_KEY))
            .and_then(Value::into_record);
        if fallback.is_none() {
            tracing::debug!("no constructor prototype to link the copy to");
        }
        fallback
    }
}

/// Rule 3: let a value that knows how to copy itself do so.
fn delegate(value: &Value) -> Option<Value> {
    match value {
        Value::Record(record) => record
            .clone_hook()
            .map(|hook| hook.clone_with(CloneMode::Deep)),
        Value::Host(host) => host
            .object()
            .as_cloneable()
            .map(|hook| hook.clone_with(CloneMode::Deep)),
        _ => None,
    }
}

fn copy_host(original: &Value, host: &Host, visited: &mut Visited) -> Value {
    let Some(node) = host.object().as_tree_node() else {
        tracing::debug!(
            kind = host.object().type_name(),
            "host object has no clone capability; sharing it"
        );
        return remember(visited, original, original.clone());
    };
    remember(visited, original, node.clone_node(true))
}

fn remember(visited: &mut Visited, original: &Value, copy: Value) -> Value {
    visited.insert(original, &copy);
    copy
}

impl Realm {
    /// A [`Cloner`] bound to this realm.
    #[must_use]
    pub const fn cloner(&self) -> Cloner<'_> {
        Cloner::new(self)
    }

    /// See [`Cloner::deep_copy`].
    #[must_use]
    pub fn deep_copy(&self, value: &Value) -> Value {
        self.cloner().deep_copy(value)
    }
}

#[cfg(test)]
mod tests;
