//! Primary error enum for the library.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors reported by `simpleoo`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimpleooError {
    /// Host capabilities could not be gathered from configuration sources.
    #[error("Failed to gather host capabilities: {0}")]
    Config(#[from] Box<FigmentError>),

    /// A pattern source did not compile.
    #[error("Invalid pattern /{source_text}/{flags}: {source}")]
    InvalidPattern {
        /// Expression text supplied by the caller.
        source_text: String,
        /// Flag string supplied by the caller.
        flags: String,
        /// Underlying compilation failure.
        #[source]
        source: regex::Error,
    },

    /// A pattern flag letter is not supported.
    #[error("Unsupported pattern flag '{flag}'")]
    UnknownPatternFlag {
        /// The rejected flag letter.
        flag: char,
    },

    /// `extend_all` was called without any source.
    #[error("extend requires at least one source")]
    EmptySources,

    /// The first `extend_all` source cannot act as an identity link.
    #[error("extend base must be a record, found {found}")]
    InvalidBase {
        /// Type name of the rejected base value.
        found: &'static str,
    },
}

impl SimpleooError {
    /// Construct a configuration error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use simpleoo::SimpleooError;
    /// let e = SimpleooError::config(figment::Error::from("boom"));
    /// assert!(matches!(e, SimpleooError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }
}
