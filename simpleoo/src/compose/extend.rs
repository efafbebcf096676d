//! Building a new record from a base and ordered layers.

use std::sync::Arc;

use crate::realm::{CONSTRUCTOR_KEY, STRINGIFY_KEY};
use crate::value::{Property, Record, Value};
use crate::{SimpleooError, SimpleooResult};

use super::{Composer, ConflictPolicy};

impl Composer<'_> {
    /// Create a record linked to `base` with `layers` applied on top.
    ///
    /// Layers are transferred in order with
    /// [`ConflictPolicy::ReplaceExisting`], so later layers win. A callable
    /// `toString` owned by a layer is copied as a whole after that layer.
    ///
    /// The result's hidden `constructor` is set to the realm's `Object`
    /// constructor. Composition cannot know the right tag, so callers re-tag
    /// the result with [`super::make_tagged_record`].
    #[must_use]
    pub fn extend(&self, base: &Record, layers: &[Value]) -> Record {
        let result = Record::new(Some(base.clone()));
        for layer in layers {
            self.transfer_properties_with(&result, layer, ConflictPolicy::ReplaceExisting);
            if let Some(stringify) = owned_stringify(layer) {
                self.write(&result, STRINGIFY_KEY, stringify);
            }
        }
        result.define_property(
            CONSTRUCTOR_KEY,
            Property::hidden(self.realm.object_constructor().clone()),
        );
        result
    }

    /// Checked form of [`Composer::extend`] over a single source list whose
    /// first entry is the base.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleooError::EmptySources`] for an empty list and
    /// [`SimpleooError::InvalidBase`] when the first source is not a record.
    pub fn extend_all(&self, sources: &[Value]) -> SimpleooResult<Record> {
        let (first, layers) = sources
            .split_first()
            .ok_or_else(|| Arc::new(SimpleooError::EmptySources))?;
        let base = first.as_record().ok_or_else(|| {
            Arc::new(SimpleooError::InvalidBase {
                found: first.type_name(),
            })
        })?;
        Ok(self.extend(base, layers))
    }
}

fn owned_stringify(layer: &Value) -> Option<Property> {
    layer
        .as_record()?
        .own_property(STRINGIFY_KEY)
        .filter(|property| property.value.is_callable())
}
