//! Prototype-style record composition and cycle-safe deep copying.
//!
//! The crate models an in-memory object graph of [`Record`]s: string-keyed
//! property tables with attribute metadata and an optional identity link
//! that lookups fall back to. On top of that model it offers two
//! independent components:
//!
//! - the [`Composer`], which merges ordered source records into a
//!   destination ([`Realm::transfer_properties`], [`Realm::mixin`]) or into a
//!   new record linked to a base ([`Realm::extend`]);
//! - the [`Cloner`], which produces deep, independent copies of arbitrary
//!   values ([`Realm::deep_copy`]).
//!
//! Both are bound to a [`Realm`], which carries the host [`Capabilities`]
//! and the universal base members.
//!
//! ```rust
//! use simpleoo::{Capabilities, Realm, Value, make_tagged_record};
//!
//! let realm = Realm::with_capabilities(Capabilities::FULL);
//! let animal = realm.record_from([("legs", Value::from(4))]);
//! let cat = realm.function("Cat", |_, _| Value::Undefined);
//!
//! let proto = realm.extend(&animal, &[Value::from(&realm.record_from([
//!     ("sound", Value::from("meow")),
//! ]))]);
//! make_tagged_record(&cat, &proto);
//!
//! let copy = realm.deep_copy(&Value::from(&proto));
//! assert_eq!(copy.as_record().map(|r| r.get("sound")), Some(Value::from("meow")));
//! ```

use std::sync::Arc;

mod cloner;
mod compose;
pub mod config;
mod error;
#[cfg(feature = "serde_json")]
mod json;
pub mod realm;
mod result_ext;
pub mod value;

pub use cloner::Cloner;
pub use compose::{Composer, ConflictPolicy, RecordComposer, make_tagged_record};
pub use config::Capabilities;
pub use error::SimpleooError;
pub use realm::Realm;
pub use result_ext::SimpleooResultExt;
pub use value::{
    Array, Attributes, Callable, CloneMode, Cloneable, Date, Host, HostObject, Pattern,
    PatternFlags, Property, Record, TreeNode, Value,
};

/// Result alias used across the crate.
pub type SimpleooResult<T> = Result<T, Arc<SimpleooError>>;
