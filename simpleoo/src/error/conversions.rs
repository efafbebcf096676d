//! Trait-based conversions between external error types and `SimpleooError`.

use figment::Error as FigmentError;

use super::SimpleooError;

impl From<FigmentError> for SimpleooError {
    fn from(e: FigmentError) -> Self {
        Self::config(e)
    }
}

impl From<SimpleooError> for FigmentError {
    /// Allow using `?` in tests that return `figment::Error`.
    fn from(e: SimpleooError) -> Self {
        match e {
            SimpleooError::Config(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
