//! Constructor tagging.

use crate::realm::CONSTRUCTOR_KEY;
use crate::value::{Property, Record};

/// Set the hidden `constructor` tag of `def` to `tag` and return `def`.
///
/// Pair this with [`super::Composer::extend`], which deliberately leaves the
/// tag at the realm's `Object` constructor.
///
/// # Examples
///
/// ```
/// use simpleoo::{Capabilities, Realm, Value, make_tagged_record};
///
/// let realm = Realm::with_capabilities(Capabilities::FULL);
/// let animal = realm.function("Animal", |_, _| Value::Undefined);
/// let proto = realm.record();
/// make_tagged_record(&animal, &proto);
/// assert_eq!(proto.get("constructor"), Value::from(&animal));
/// assert!(proto.own_keys().is_empty());
/// ```
pub fn make_tagged_record<'d>(tag: &Record, def: &'d Record) -> &'d Record {
    if !def.define_property(CONSTRUCTOR_KEY, Property::hidden(tag.clone())) {
        tracing::debug!("constructor tag is sealed; leaving it unchanged");
    }
    def
}
