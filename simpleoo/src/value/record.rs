//! Shared, prototype-linked property records.
//!
//! A [`Record`] is a reference-counted handle: cloning the handle shares the
//! underlying record, and [`Record::ptr_eq`] compares identity. Lookups that
//! miss the record's own table fall back along the identity link returned by
//! [`Record::prototype`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::host::Cloneable;
use super::{Callable, Property, Value};

/// Handle to a property record with an optional identity link.
#[derive(Clone, Default)]
pub struct Record(Rc<RefCell<RecordData>>);

#[derive(Default)]
struct RecordData {
    properties: IndexMap<String, Property>,
    prototype: Option<Record>,
    callable: Option<Callable>,
    clone_hook: Option<Rc<dyn Cloneable>>,
}

impl Record {
    /// Create an empty record linked to `prototype`.
    #[must_use]
    pub fn new(prototype: Option<Self>) -> Self {
        Self(Rc::new(RefCell::new(RecordData {
            prototype,
            ..RecordData::default()
        })))
    }

    /// Create an empty function-like record that carries `callable`.
    #[must_use]
    pub fn with_callable(prototype: Option<Self>, callable: Callable) -> Self {
        Self(Rc::new(RefCell::new(RecordData {
            prototype,
            callable: Some(callable),
            ..RecordData::default()
        })))
    }

    /// Returns `true` when both handles point at the same record.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }

    /// The record that lookups fall back to.
    #[must_use]
    pub fn prototype(&self) -> Option<Self> {
        self.0.borrow().prototype.clone()
    }

    /// Replace the identity link.
    pub fn set_prototype(&self, prototype: Option<Self>) {
        self.0.borrow_mut().prototype = prototype;
    }

    /// The callable carried by a function-like record.
    #[must_use]
    pub fn callable(&self) -> Option<Callable> {
        self.0.borrow().callable.clone()
    }

    /// Returns `true` for function-like records.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.0.borrow().callable.is_some()
    }

    /// Invoke the record's callable with `self` as the receiver.
    ///
    /// Returns `None` when the record is not function-like.
    #[must_use]
    pub fn call(&self, this: &Value, args: &[Value]) -> Option<Value> {
        self.callable().map(|callable| callable.call(this, args))
    }

    /// The self-describing clone capability attached to this record, if any.
    #[must_use]
    pub fn clone_hook(&self) -> Option<Rc<dyn Cloneable>> {
        self.0.borrow().clone_hook.clone()
    }

    /// Attach a self-describing clone capability.
    pub fn set_clone_hook(&self, hook: Rc<dyn Cloneable>) {
        self.0.borrow_mut().clone_hook = Some(hook);
    }

    /// Number of own properties, enumerable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().properties.len()
    }

    /// Returns `true` when the record owns no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().properties.is_empty()
    }

    /// Returns `true` when `name` is an own property.
    #[must_use]
    pub fn has_own(&self, name: &str) -> bool {
        self.0.borrow().properties.contains_key(name)
    }

    /// The value of an own property.
    #[must_use]
    pub fn get_own(&self, name: &str) -> Option<Value> {
        self.0
            .borrow()
            .properties
            .get(name)
            .map(|property| property.value.clone())
    }

    /// The full descriptor of an own property.
    #[must_use]
    pub fn own_property(&self, name: &str) -> Option<Property> {
        self.0.borrow().properties.get(name).cloned()
    }

    /// Enumerable own property names in insertion order.
    #[must_use]
    pub fn own_keys(&self) -> Vec<String> {
        self.0
            .borrow()
            .properties
            .iter()
            .filter(|(_, property)| property.is_enumerable())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Every own property name, including hidden ones.
    #[must_use]
    pub fn own_property_names(&self) -> Vec<String> {
        self.0.borrow().properties.keys().cloned().collect()
    }

    /// Snapshot of the enumerable own properties with their descriptors.
    #[must_use]
    pub fn own_entries(&self) -> Vec<(String, Property)> {
        self.0
            .borrow()
            .properties
            .iter()
            .filter(|(_, property)| property.is_enumerable())
            .map(|(name, property)| (name.clone(), property.clone()))
            .collect()
    }

    /// Resolve `name` on this record, then along the identity link.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpleoo::{Record, Value};
    ///
    /// let base = Record::new(None);
    /// base.set("eat", Value::from("yum"));
    /// let child = Record::new(Some(base));
    /// assert_eq!(child.lookup("eat"), Some(Value::from("yum")));
    /// assert!(child.lookup("bark").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut current = Some(self.clone());
        while let Some(record) = current {
            if let Some(value) = record.get_own(name) {
                return Some(value);
            }
            current = record.prototype();
        }
        None
    }

    /// Like [`Record::lookup`], yielding [`Value::Undefined`] for absent names.
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        self.lookup(name).unwrap_or_default()
    }

    /// Returns `true` when `name` resolves on this record or its chain.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.chain().any(|record| record.has_own(name))
    }

    /// Enumerable names visible on this record, own names first and then
    /// inherited ones. A name is reported once; a hidden own property hides
    /// an inherited enumerable one of the same name.
    #[must_use]
    pub fn enumerable_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for record in self.chain() {
            let data = record.0.borrow();
            for (name, property) in &data.properties {
                if seen.insert(name.clone()) && property.is_enumerable() {
                    keys.push(name.clone());
                }
            }
        }
        keys
    }

    /// Assign `value` to `name` on this record.
    ///
    /// New names receive default attributes and existing names keep theirs.
    /// Returns `false` when an own read-only property rejected the write.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> bool {
        let mut data = self.0.borrow_mut();
        match data.properties.get_mut(name) {
            Some(existing) if !existing.is_writable() => false,
            Some(existing) => {
                existing.value = value.into();
                true
            }
            None => {
                data.properties.insert(name.to_owned(), Property::new(value));
                true
            }
        }
    }

    /// Define `name` with a complete descriptor in one step.
    ///
    /// Returns `false` when an existing own property is not configurable.
    pub fn define_property(&self, name: &str, property: Property) -> bool {
        let mut data = self.0.borrow_mut();
        match data.properties.get_mut(name) {
            Some(existing) if !existing.is_configurable() => false,
            Some(existing) => {
                *existing = property;
                true
            }
            None => {
                data.properties.insert(name.to_owned(), property);
                true
            }
        }
    }

    /// Remove an own property. Non-configurable properties are kept.
    pub fn delete(&self, name: &str) -> bool {
        let mut data = self.0.borrow_mut();
        match data.properties.get(name).map(Property::is_configurable) {
            Some(false) => false,
            Some(true) => {
                data.properties.shift_remove(name);
                true
            }
            None => true,
        }
    }

    /// Returns `true` when `self` appears on the identity-link chain of
    /// `other` (excluding `other` itself).
    #[must_use]
    pub fn is_prototype_of(&self, other: &Self) -> bool {
        other.ancestors().any(|record| record.ptr_eq(self))
    }

    /// Iterate this record followed by every record on its identity chain.
    pub fn chain(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self.clone()), Self::prototype)
    }

    /// Iterate the identity chain, starting at the direct prototype.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(self.prototype(), Self::prototype)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(data) = self.0.try_borrow() else {
            return f.write_str("Record(<borrowed>)");
        };
        let keys: Vec<&str> = data.properties.keys().map(String::as_str).collect();
        f.debug_struct("Record")
            .field("keys", &keys)
            .field("linked", &data.prototype.is_some())
            .field("callable", &data.callable.as_ref().map(Callable::name))
            .finish_non_exhaustive()
    }
}
