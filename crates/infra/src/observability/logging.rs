//! Tracing subscriber initialisation
//!
//! `RUST_LOG` takes precedence over the configured level when it holds a
//! valid filter.

use caltally_domain::{CalTallyError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber described by `config`
///
/// # Errors
/// Returns `CalTallyError::Config` if the level is not a valid filter
/// directive or a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            CalTallyError::Config(format!("Invalid log level '{}': {e}", config.level))
        })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|e| CalTallyError::Config(format!("Tracing already initialised: {e}")))?;

    tracing::debug!(level = %config.level, json = config.json, "Tracing initialised");
    Ok(())
}
