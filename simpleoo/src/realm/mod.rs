//! The host environment that records are created in.
//!
//! A [`Realm`] owns the universal base record, the `Object` constructor that
//! serves as the default constructor tag, and the [`Capabilities`] the
//! composer and the cloner branch on. Nothing here is global: two realms
//! built with different capabilities behave independently.

mod builtins;

use crate::config::Capabilities;
use crate::value::{Attributes, Callable, Property, Record, Value};

/// Name of the property holding a record's constructor tag.
pub const CONSTRUCTOR_KEY: &str = "constructor";

/// Name of the property on a constructor that holds its instance prototype.
pub const PROTOTYPE_KEY: &str = "prototype";

/// Name of the stringification member that composition copies wholesale.
pub const STRINGIFY_KEY: &str = "toString";

/// A host environment.
#[derive(Debug)]
pub struct Realm {
    capabilities: Capabilities,
    object_prototype: Record,
    function_prototype: Record,
    object_constructor: Record,
    baseline: Record,
}

impl Realm {
    /// Create a realm using the process-wide [`Capabilities::probe`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::probe())
    }

    /// Create a realm with explicit capabilities.
    #[must_use]
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        let object_prototype = Record::new(None);
        let function_prototype = Record::new(Some(object_prototype.clone()));
        let object_constructor = Record::with_callable(
            Some(function_prototype.clone()),
            Callable::new("Object", builtins::object_call),
        );
        object_constructor.define_property(
            PROTOTYPE_KEY,
            Property::with_attributes(
                object_prototype.clone(),
                Attributes {
                    enumerable: false,
                    writable: false,
                    configurable: false,
                },
            ),
        );
        builtins::install(&object_prototype, &function_prototype);
        object_prototype.define_property(
            CONSTRUCTOR_KEY,
            Property::hidden(object_constructor.clone()),
        );
        let baseline = Record::new(Some(object_prototype.clone()));
        Self {
            capabilities,
            object_prototype,
            function_prototype,
            object_constructor,
            baseline,
        }
    }

    /// The capabilities this realm was created with.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The universal base record every plain record links to.
    #[must_use]
    pub const fn object_prototype(&self) -> &Record {
        &self.object_prototype
    }

    /// The base record of every function-like record.
    #[must_use]
    pub const fn function_prototype(&self) -> &Record {
        &self.function_prototype
    }

    /// The `Object` constructor, used as the default constructor tag.
    #[must_use]
    pub const fn object_constructor(&self) -> &Record {
        &self.object_constructor
    }

    /// An empty record linked to the universal base. Names visible on it are
    /// never transferred between records.
    #[must_use]
    pub const fn baseline(&self) -> &Record {
        &self.baseline
    }

    /// Returns `true` when `name` is a member every record inherits.
    #[must_use]
    pub fn is_universal_member(&self, name: &str) -> bool {
        self.baseline.has_property(name)
    }

    /// Create an empty plain record.
    #[must_use]
    pub fn record(&self) -> Record {
        Record::new(Some(self.object_prototype.clone()))
    }

    /// Create a plain record holding `entries` in order.
    #[must_use]
    pub fn record_from<'a, I>(&self, entries: I) -> Record
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let record = self.record();
        for (name, value) in entries {
            record.set(name, value);
        }
        record
    }

    /// Create an empty record linked to `prototype`, or to nothing.
    #[must_use]
    pub fn record_with_prototype(&self, prototype: Option<&Record>) -> Record {
        Record::new(prototype.cloned())
    }

    /// Create a function-like record.
    ///
    /// The function receives a fresh `prototype` record whose hidden
    /// `constructor` points back at it, so instances created with
    /// [`Realm::instantiate`] resolve to the function as their tag.
    #[must_use]
    pub fn function<F>(&self, name: &str, body: F) -> Record
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        let function = Record::with_callable(
            Some(self.function_prototype.clone()),
            Callable::new(name, body),
        );
        let prototype = self.record();
        prototype.define_property(CONSTRUCTOR_KEY, Property::hidden(function.clone()));
        function.define_property(
            PROTOTYPE_KEY,
            Property::with_attributes(
                prototype,
                Attributes {
                    enumerable: false,
                    writable: true,
                    configurable: false,
                },
            ),
        );
        function
    }

    /// Create an instance of `constructor` without running it: an empty
    /// record linked to the constructor's `prototype` record, or to the
    /// universal base when it has none.
    #[must_use]
    pub fn instantiate(&self, constructor: &Record) -> Record {
        let prototype = constructor
            .get_own(PROTOTYPE_KEY)
            .and_then(Value::into_record)
            .unwrap_or_else(|| self.object_prototype.clone());
        Record::new(Some(prototype))
    }

    /// Returns `true` when the `prototype` record of `constructor` is on the
    /// identity chain of `value`.
    #[must_use]
    pub fn instance_of(&self, value: &Value, constructor: &Record) -> bool {
        let Some(record) = value.as_record() else {
            return false;
        };
        constructor
            .get_own(PROTOTYPE_KEY)
            .and_then(Value::into_record)
            .is_some_and(|prototype| prototype.is_prototype_of(record))
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}
