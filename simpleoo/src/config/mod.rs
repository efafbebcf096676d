//! Host capability configuration.
//!
//! A [`Capabilities`] value tells the composer and the cloner which
//! introspection features the host provides. It is normally computed once by
//! [`Capabilities::probe`] and handed to a [`crate::Realm`]; tests build one
//! explicitly instead.
//!
//! Sources are layered with Figment, lowest precedence first:
//!
//! 1. built-in defaults (every capability enabled);
//! 2. a TOML file named by `SIMPLEOO_CONFIG_PATH`, when set;
//! 3. `SIMPLEOO_`-prefixed environment variables, for example
//!    `SIMPLEOO_METADATA_PRESERVATION=false`.

use std::sync::OnceLock;

use camino::Utf8PathBuf;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::{SimpleooResult, SimpleooResultExt};

/// Prefix shared by every environment variable the loader reads.
pub const ENV_PREFIX: &str = "SIMPLEOO_";

/// Environment variable naming an optional TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "SIMPLEOO_CONFIG_PATH";

static PROBED: OnceLock<Capabilities> = OnceLock::new();

/// Introspection features available to the composer and the cloner.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Capabilities {
    /// Property transfer copies value and attributes as one unit. When off,
    /// only values are copied and new slots take default attributes.
    pub metadata_preservation: bool,
    /// The cloner reads identity links directly. When off, it falls back to
    /// the `prototype` of the value's `constructor`.
    pub prototype_introspection: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::FULL
    }
}

impl Capabilities {
    /// Every capability enabled.
    pub const FULL: Self = Self {
        metadata_preservation: true,
        prototype_introspection: true,
    };

    /// Every capability disabled, as on hosts without descriptor support.
    pub const LEGACY: Self = Self {
        metadata_preservation: false,
        prototype_introspection: false,
    };

    /// Build the layered Figment the loader extracts from.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_path() {
            figment = figment.merge(Toml::file(path.as_std_path()));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config_path"]))
    }

    /// Load capabilities from the layered sources.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimpleooError::Config`] when a source holds a value
    /// of the wrong type or the TOML file is malformed.
    pub fn load() -> SimpleooResult<Self> {
        Self::figment().extract().into_simpleoo()
    }

    /// Process-wide capabilities, loaded on first use and memoised.
    ///
    /// A failed load is logged and replaced by [`Capabilities::default`].
    /// Computing the value twice is harmless; only the first result is kept.
    #[must_use]
    pub fn probe() -> Self {
        *PROBED.get_or_init(|| match Self::load() {
            Ok(capabilities) => {
                tracing::debug!(?capabilities, "host capabilities probed");
                capabilities
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load host capabilities; using defaults");
                Self::default()
            }
        })
    }
}

fn config_path() -> Option<Utf8PathBuf> {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|path| !path.is_empty())
        .map(Utf8PathBuf::from)
}
