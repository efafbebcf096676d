//! Capability loading inside an isolated `figment::Jail`.

use anyhow::{Result, anyhow};
use simpleoo::Capabilities;

/// Load [`Capabilities`] inside a fresh jail after `setup` has prepared files
/// and environment variables.
///
/// The jail starts with a cleared environment, so only what `setup` sets is
/// visible to the loader.
///
/// # Errors
///
/// Returns an error when `setup` fails or the capabilities cannot be loaded.
pub fn load_capabilities<F>(setup: F) -> Result<Capabilities>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<()>,
{
    let mut loaded = None;
    figment::Jail::try_with(|jail| {
        jail.clear_env();
        setup(jail)?;
        let capabilities =
            Capabilities::load().map_err(|err| figment::Error::from(err.to_string()))?;
        loaded = Some(capabilities);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    loaded.ok_or_else(|| anyhow!("jail closure did not load capabilities"))
}
