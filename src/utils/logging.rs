//! # Logging
//!
//! Structured logging setup driven by [`LoggingConfig`].
//!
//! The codec itself only emits `tracing` events; installing a subscriber is left to
//! the application. `RUST_LOG` takes precedence over the configured level when set.

use crate::config::LoggingConfig;
use crate::error::{CodecError, Result};
use tracing_subscriber::EnvFilter;

/// Build the env filter for `config`, preferring `RUST_LOG` when present.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_ascii_lowercase()))
}

/// Install a global fmt subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| {
        CodecError::ConfigError(format!(
            "Failed to initialise logging for {}: {e}",
            config.app_name
        ))
    })
}
