//! Builder that accumulates layers before extending a base record.

use crate::Realm;
use crate::value::{Record, Value};

use super::make_tagged_record;

/// Accumulates the layers of an [`super::Composer::extend`] call and an
/// optional constructor tag.
///
/// ```rust
/// use simpleoo::{Capabilities, Realm, RecordComposer, Value};
///
/// let realm = Realm::with_capabilities(Capabilities::FULL);
/// let animal = realm.function("Animal", |_, _| Value::Undefined);
/// let cat = realm.function("Cat", |_, _| Value::Undefined);
/// let animal_proto = realm
///     .instantiate(&animal)
///     .prototype()
///     .expect("instances link to the prototype");
/// animal_proto.set("eat", Value::from("yum"));
///
/// let cat_proto = RecordComposer::new(animal_proto)
///     .layer(realm.record_from([("meow", Value::from("meow"))]))
///     .tag(cat.clone())
///     .compose(&realm);
/// cat.set("prototype", cat_proto);
///
/// let garfield = realm.instantiate(&cat);
/// assert!(realm.instance_of(&Value::from(&garfield), &cat));
/// assert!(realm.instance_of(&Value::from(&garfield), &animal));
/// assert_eq!(garfield.get("eat"), Value::from("yum"));
/// ```
#[derive(Debug)]
pub struct RecordComposer {
    base: Record,
    layers: Vec<Value>,
    tag: Option<Record>,
}

impl RecordComposer {
    /// Start composing on top of `base`.
    #[must_use]
    pub const fn new(base: Record) -> Self {
        Self {
            base,
            layers: Vec::new(),
            tag: None,
        }
    }

    /// Start composing with room for `capacity` layers.
    #[must_use]
    pub fn with_capacity(base: Record, capacity: usize) -> Self {
        Self {
            base,
            layers: Vec::with_capacity(capacity),
            tag: None,
        }
    }

    /// Push a layer.
    pub fn push_layer(&mut self, layer: impl Into<Value>) {
        self.layers.push(layer.into());
    }

    /// Push a layer, builder style.
    #[must_use]
    pub fn layer(mut self, layer: impl Into<Value>) -> Self {
        self.push_layer(layer);
        self
    }

    /// Tag the composed record with `constructor`.
    #[must_use]
    pub fn tag(mut self, constructor: Record) -> Self {
        self.tag = Some(constructor);
        self
    }

    /// The layers pushed so far.
    #[must_use]
    pub fn layers(&self) -> &[Value] {
        &self.layers
    }

    /// Extend the base with the accumulated layers and apply the tag.
    #[must_use]
    pub fn compose(self, realm: &Realm) -> Record {
        let result = realm.composer().extend(&self.base, &self.layers);
        if let Some(tag) = &self.tag {
            make_tagged_record(tag, &result);
        }
        result
    }
}
