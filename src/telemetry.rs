//! Logging setup.
//!
//! The subscriber is installed once by the binaries. Library code only emits
//! `tracing` events and never touches subscriber state.
//!
//! | `APP_ENV` | Format | Default level |
//! |-----------|--------|---------------|
//! | `local`   | text   | debug         |
//! | `dev`     | JSON   | debug         |
//! | `prod`    | JSON   | info          |
//!
//! A non-empty `RUST_LOG` replaces the default level filter.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{AppEnv, Config};

/// Returns the filter directive used when `RUST_LOG` is not set.
pub fn default_directive(env: AppEnv) -> &'static str {
    match env {
        AppEnv::Local | AppEnv::Dev => "debug",
        AppEnv::Prod => "info",
    }
}

/// Builds the level filter for `config`.
///
/// # Errors
///
/// Returns an error if the `RUST_LOG` value cannot be parsed.
pub fn env_filter(config: &Config) -> Result<EnvFilter> {
    let directive = config
        .log_filter
        .as_deref()
        .unwrap_or_else(|| default_directive(config.env));

    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter '{}'", directive))
}

/// Installs the global subscriber for `config`.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.env {
        AppEnv::Local => builder.try_init(),
        AppEnv::Dev | AppEnv::Prod => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_per_env() {
        assert_eq!(default_directive(AppEnv::Local), "debug");
        assert_eq!(default_directive(AppEnv::Dev), "debug");
        assert_eq!(default_directive(AppEnv::Prod), "info");
    }

    #[test]
    fn test_env_filter_uses_override() {
        let config = Config {
            env: AppEnv::Prod,
            log_filter: Some("url_alias=trace,sqlx=warn".to_string()),
            ..Config::default()
        };

        let filter = env_filter(&config).unwrap();
        assert!(filter.to_string().contains("url_alias=trace"));
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        let config = Config {
            log_filter: Some("url_alias=loud".to_string()),
            ..Config::default()
        };

        assert!(env_filter(&config).is_err());
    }
}
