//! Property transfer between two records.

use crate::value::{Property, Record, Value};

use super::Composer;

/// What happens when the destination already owns a transferred name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConflictPolicy {
    /// Leave the destination's own property untouched.
    #[default]
    KeepExisting,
    /// Overwrite the destination's own property.
    ReplaceExisting,
}

impl ConflictPolicy {
    /// Map the boolean `replace_existing` flag onto a policy.
    #[must_use]
    pub const fn from_replace(replace_existing: bool) -> Self {
        if replace_existing {
            Self::ReplaceExisting
        } else {
            Self::KeepExisting
        }
    }
}

impl Composer<'_> {
    /// Transfer properties from `src` without replacing existing ones.
    ///
    /// Shorthand for [`Composer::transfer_properties_with`] using
    /// [`ConflictPolicy::KeepExisting`].
    pub fn transfer_properties<'d>(&self, dst: &'d Record, src: &Value) -> &'d Record {
        self.transfer_properties_with(dst, src, ConflictPolicy::KeepExisting)
    }

    /// Copy every enumerable own property of `src` onto `dst`.
    ///
    /// Names visible on the realm baseline (the universal base members) are
    /// skipped. Under [`ConflictPolicy::KeepExisting`] names `dst` already
    /// owns are skipped too. With metadata preservation the descriptor is
    /// copied as one unit; otherwise only the value is assigned.
    ///
    /// A `src` that is not a record contributes nothing. `dst` and `src`
    /// may be the same record.
    pub fn transfer_properties_with<'d>(
        &self,
        dst: &'d Record,
        src: &Value,
        policy: ConflictPolicy,
    ) -> &'d Record {
        let Some(source) = src.as_record() else {
            if !src.is_nullish() {
                tracing::trace!(kind = src.type_name(), "source has no transferable properties");
            }
            return dst;
        };
        for (name, property) in source.own_entries() {
            if self.realm.is_universal_member(&name) {
                continue;
            }
            if policy == ConflictPolicy::KeepExisting && dst.has_own(&name) {
                continue;
            }
            self.write(dst, &name, property);
        }
        dst
    }

    /// Apply each of `sources` to `dst` in order, replacing on collision.
    ///
    /// Later sources win. Returns `dst`.
    pub fn mixin<'d>(&self, dst: &'d Record, sources: &[Value]) -> &'d Record {
        for source in sources {
            self.transfer_properties_with(dst, source, ConflictPolicy::ReplaceExisting);
        }
        dst
    }

    pub(super) fn write(&self, dst: &Record, name: &str, property: Property) -> bool {
        let written = if self.realm.capabilities().metadata_preservation {
            // Sealed but writable slots still accept the value.
            dst.define_property(name, property.clone()) || dst.set(name, property.value)
        } else {
            dst.set(name, property.value)
        };
        if written {
            tracing::trace!(name, "transferred property");
        } else {
            tracing::debug!(name, "destination rejected property write");
        }
        written
    }
}
