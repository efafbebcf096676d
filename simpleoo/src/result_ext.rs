//! Extensions for mapping errors to `SimpleooResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(e.into()))`
//! patterns when converting external error types into the crate's
//! `SimpleooResult<T>` alias (`Result<T, Arc<SimpleooError>>`).
//!
//! # Examples
//!
//! ```
//! use simpleoo::{SimpleooResult, SimpleooResultExt};
//!
//! fn load() -> SimpleooResult<bool> {
//!     // figment::Error implements Into<SimpleooError>
//!     figment::Figment::new().extract_inner::<bool>("missing").into_simpleoo()
//! }
//! assert!(load().is_err());
//! ```

use std::sync::Arc;

use crate::{SimpleooError, SimpleooResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<SimpleooError>` into a `SimpleooResult<T>`.
pub trait SimpleooResultExt<T, E> {
    /// Convert `Result<T, E>` into `SimpleooResult<T>` using
    /// `Into<SimpleooError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<SimpleooError>`.
    fn into_simpleoo(self) -> SimpleooResult<T>;
}

impl<T, E> SimpleooResultExt<T, E> for Result<T, E>
where
    E: Into<SimpleooError>,
{
    fn into_simpleoo(self) -> SimpleooResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
