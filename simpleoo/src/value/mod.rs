//! The value model shared by the composer and the cloner.
//!
//! Scalars are held inline and compared by value. Every other variant is a
//! reference-counted handle with identity: cloning a [`Value`] never copies
//! the underlying composite, it only shares it. Use
//! [`crate::Cloner`] for structural copies.

mod array;
mod host;
mod leaf;
mod property;
mod record;

use std::fmt;
use std::rc::Rc;

pub use array::Array;
pub use host::{CloneMode, Cloneable, Host, HostObject, TreeNode};
pub use leaf::{Date, Pattern, PatternFlags};
pub use property::{Attributes, Property};
pub use record::Record;

/// Signature of native code carried by function-like records.
pub type NativeFn = dyn Fn(&Value, &[Value]) -> Value;

/// Native code plus a display name.
///
/// Callables are immutable and shared by reference; copying a function-like
/// record shares its callable.
#[derive(Clone)]
pub struct Callable {
    name: Rc<str>,
    body: Rc<NativeFn>,
}

impl Callable {
    /// Wrap `body` under `name`.
    #[must_use]
    pub fn new<F>(name: &str, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Value + 'static,
    {
        Self {
            name: Rc::from(name),
            body: Rc::new(body),
        }
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the code with `this` as receiver.
    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        (self.body)(this, args)
    }

    /// Returns `true` when both callables share the same code.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({})", self.name)
    }
}

/// Any value that can be stored in a record.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A property record (plain or function-like).
    Record(Record),
    /// An array-like sequence.
    Array(Array),
    /// A point in time.
    Date(Date),
    /// A regular expression.
    Pattern(Pattern),
    /// An object owned by the embedding program.
    Host(Host),
}

impl Value {
    /// Returns `true` for reference-carrying variants.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::Record(_) | Self::Array(_) | Self::Date(_) | Self::Pattern(_) | Self::Host(_)
        )
    }

    /// Returns `true` for [`Value::Undefined`] and [`Value::Null`].
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns `true` for function-like records.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.as_record().is_some_and(Record::is_callable)
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Record(record) if record.is_callable() => "function",
            Self::Record(_) => "record",
            Self::Array(_) => "array",
            Self::Date(_) => "date",
            Self::Pattern(_) => "pattern",
            Self::Host(host) => host.object().type_name(),
        }
    }

    /// Borrow the record handle.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Take the record handle.
    #[must_use]
    pub fn into_record(self) -> Option<Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Borrow the array handle.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Borrow the date handle.
    #[must_use]
    pub const fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(date) => Some(date),
            _ => None,
        }
    }

    /// Borrow the pattern handle.
    #[must_use]
    pub const fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Self::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// Borrow the host handle.
    #[must_use]
    pub const fn as_host(&self) -> Option<&Host> {
        match self {
            Self::Host(host) => Some(host),
            _ => None,
        }
    }

    /// The string contents.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// The numeric contents.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The boolean contents.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Strict equality: scalars by value, composites by identity.
    ///
    /// `NaN` is never equal to itself.
    #[must_use]
    pub fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            #[expect(clippy::float_cmp, reason = "strict equality compares exact values")]
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a.ptr_eq(b),
            (Self::Array(a), Self::Array(b)) => a.ptr_eq(b),
            (Self::Date(a), Self::Date(b)) => a.ptr_eq(b),
            (Self::Pattern(a), Self::Pattern(b)) => a.ptr_eq(b),
            (Self::Host(a), Self::Host(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Identity key of a composite, `None` for scalars.
    pub(crate) fn addr(&self) -> Option<usize> {
        match self {
            Self::Record(record) => Some(record.addr()),
            Self::Array(array) => Some(array.addr()),
            Self::Date(date) => Some(date.addr()),
            Self::Pattern(pattern) => Some(pattern.addr()),
            Self::Host(host) => Some(host.addr()),
            Self::Undefined | Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => {
                None
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(Rc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(Rc::from(text))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<&Record> for Value {
    fn from(record: &Record) -> Self {
        Self::Record(record.clone())
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Self::Array(array)
    }
}

impl From<Date> for Value {
    fn from(date: Date) -> Self {
        Self::Date(date)
    }
}

impl From<Pattern> for Value {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Host> for Value {
    fn from(host: Host) -> Self {
        Self::Host(host)
    }
}
