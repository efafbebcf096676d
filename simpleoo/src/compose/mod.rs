//! Layered record composition.
//!
//! [`Composer`] exposes the three composition primitives over a [`Realm`]:
//!
//! - [`Composer::transfer_properties_with`] copies the enumerable own
//!   properties of one record onto another under a [`ConflictPolicy`];
//! - [`Composer::mixin`] applies several sources over a destination, later
//!   sources winning;
//! - [`Composer::extend`] builds a new record linked to a base and layers
//!   further sources on top.
//!
//! Composition never fails. Writes the destination rejects are skipped and
//! logged at `debug`.
//!
//! # Example
//!
//! ```rust
//! use simpleoo::{Capabilities, Realm, Value};
//!
//! let realm = Realm::with_capabilities(Capabilities::FULL);
//! let base = realm.record_from([("eat", Value::from("yum"))]);
//! let cat = realm.record_from([("meow", Value::from("meow"))]);
//!
//! let merged = realm.extend(&base, &[Value::from(&cat)]);
//! assert_eq!(merged.get("eat"), Value::from("yum"));
//! assert_eq!(merged.get("meow"), Value::from("meow"));
//! assert!(merged.lookup("bark").is_none());
//! ```

mod builder;
mod extend;
mod tag;
mod transfer;

pub use builder::RecordComposer;
pub use tag::make_tagged_record;
pub use transfer::ConflictPolicy;

use crate::Realm;
use crate::SimpleooResult;
use crate::value::{Record, Value};

/// Composition operations bound to a realm.
#[derive(Clone, Copy, Debug)]
pub struct Composer<'r> {
    realm: &'r Realm,
}

impl<'r> Composer<'r> {
    /// Bind a composer to `realm`.
    #[must_use]
    pub const fn new(realm: &'r Realm) -> Self {
        Self { realm }
    }

    /// The realm this composer reads capabilities and built-ins from.
    #[must_use]
    pub const fn realm(&self) -> &'r Realm {
        self.realm
    }
}

impl Realm {
    /// A [`Composer`] bound to this realm.
    #[must_use]
    pub const fn composer(&self) -> Composer<'_> {
        Composer::new(self)
    }

    /// See [`Composer::transfer_properties_with`].
    pub fn transfer_properties<'d>(
        &self,
        dst: &'d Record,
        src: &Value,
        replace_existing: bool,
    ) -> &'d Record {
        self.composer()
            .transfer_properties_with(dst, src, ConflictPolicy::from_replace(replace_existing))
    }

    /// See [`Composer::mixin`].
    pub fn mixin<'d>(&self, dst: &'d Record, sources: &[Value]) -> &'d Record {
        self.composer().mixin(dst, sources)
    }

    /// See [`Composer::extend`].
    #[must_use]
    pub fn extend(&self, base: &Record, layers: &[Value]) -> Record {
        self.composer().extend(base, layers)
    }

    /// See [`Composer::extend_all`].
    ///
    /// # Errors
    ///
    /// Returns an error when `sources` is empty or its first entry is not a
    /// record.
    pub fn extend_all(&self, sources: &[Value]) -> SimpleooResult<Record> {
        self.composer().extend_all(sources)
    }
}

#[cfg(test)]
mod tests;
