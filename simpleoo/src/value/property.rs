//! Property slots and their attribute metadata.

use super::Value;

/// Attribute flags attached to every property slot.
///
/// Hosts without rich introspection treat every property as enumerable,
/// writable, and configurable, which is what [`Attributes::default`] yields.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Attributes {
    /// Whether the property is visited by enumeration.
    pub enumerable: bool,
    /// Whether assignment may replace the value.
    pub writable: bool,
    /// Whether the property may be redefined or deleted.
    pub configurable: bool,
}

impl Attributes {
    /// Attributes for an ordinary, fully visible property.
    pub const VISIBLE: Self = Self {
        enumerable: true,
        writable: true,
        configurable: true,
    };

    /// Attributes for a hidden but otherwise mutable property, as used for
    /// built-in members and constructor tags.
    pub const HIDDEN: Self = Self {
        enumerable: false,
        writable: true,
        configurable: true,
    };

    /// Attributes for a sealed, read-only property.
    pub const FROZEN: Self = Self {
        enumerable: true,
        writable: false,
        configurable: false,
    };
}

impl Default for Attributes {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// A property descriptor: a value together with its [`Attributes`].
#[derive(Clone, Debug, Default)]
pub struct Property {
    /// The stored value.
    pub value: Value,
    /// Metadata governing enumeration and mutation.
    pub attributes: Attributes,
}

impl Property {
    /// Build a property with default attributes.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            attributes: Attributes::default(),
        }
    }

    /// Build a property with explicit attributes.
    #[must_use]
    pub fn with_attributes(value: impl Into<Value>, attributes: Attributes) -> Self {
        Self {
            value: value.into(),
            attributes,
        }
    }

    /// Build a non-enumerable property.
    #[must_use]
    pub fn hidden(value: impl Into<Value>) -> Self {
        Self::with_attributes(value, Attributes::HIDDEN)
    }

    /// Returns `true` when enumeration visits this property.
    #[must_use]
    pub const fn is_enumerable(&self) -> bool {
        self.attributes.enumerable
    }

    /// Returns `true` when assignment may replace the value.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        self.attributes.writable
    }

    /// Returns `true` when the property may be redefined or deleted.
    #[must_use]
    pub const fn is_configurable(&self) -> bool {
        self.attributes.configurable
    }
}
