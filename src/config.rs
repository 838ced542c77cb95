//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="prod"
//! export STORAGE_PATH="/var/lib/url-alias/storage.db"
//! export LISTEN="0.0.0.0:8082"
//! ```
//!
//! ## Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`); selects log format and level
//! - `STORAGE_BACKEND` - `sqlite` or `memory` (default: `sqlite`)
//! - `STORAGE_PATH` - SQLite database file (default: `./storage/storage.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6, range: 1-64)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - Seconds to wait on a locked database (default: 5)
//! - `RUST_LOG` - Overrides the log level implied by `APP_ENV`

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::persistence::SqliteOptions;
use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

/// Deployment environment tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    /// Text logs at debug level.
    Local,
    /// JSON logs at debug level.
    Dev,
    /// JSON logs at info level.
    Prod,
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        };
        f.write_str(s)
    }
}

/// Which store implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => anyhow::bail!(
                "STORAGE_BACKEND must be 'sqlite' or 'memory', got '{}'",
                other
            ),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub storage_backend: StorageBackend,
    pub storage_path: String,
    pub listen_addr: String,
    /// Length of aliases generated when the caller does not supply one.
    pub alias_length: usize,
    /// Raw `RUST_LOG` value, if set. Takes precedence over the level implied by `env`.
    pub log_filter: Option<String>,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    pub db_max_connections: u32,
    /// Busy timeout in seconds.
    pub db_busy_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: AppEnv::Local,
            storage_backend: StorageBackend::Sqlite,
            storage_path: "./storage/storage.db".to_string(),
            listen_addr: "0.0.0.0:8082".to_string(),
            alias_length: DEFAULT_ALIAS_LENGTH,
            log_filter: None,
            db_max_connections: 5,
            db_busy_timeout: 5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let env: AppEnv = match env::var("APP_ENV") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.env,
        };

        let storage_backend: StorageBackend = match env::var("STORAGE_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.storage_backend,
        };

        let storage_path = env::var("STORAGE_PATH").unwrap_or(defaults.storage_path);
        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_filter = env::var("RUST_LOG").ok().filter(|v| !v.is_empty());

        let alias_length = parse_var("ALIAS_LENGTH")?.unwrap_or(defaults.alias_length);
        let db_max_connections =
            parse_var("DB_MAX_CONNECTIONS")?.unwrap_or(defaults.db_max_connections);
        let db_busy_timeout = parse_var("DB_BUSY_TIMEOUT")?.unwrap_or(defaults.db_busy_timeout);

        Ok(Self {
            env,
            storage_backend,
            storage_path,
            listen_addr,
            alias_length,
            log_filter,
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `alias_length` is outside 1-64
    /// - `storage_path` is empty while the SQLite backend is selected
    /// - `listen_addr` is not `host:port`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.alias_length == 0 || self.alias_length > 64 {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and 64, got {}",
                self.alias_length
            );
        }

        if self.storage_backend == StorageBackend::Sqlite && self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty when STORAGE_BACKEND is 'sqlite'");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// SQLite connection settings derived from this configuration.
    pub fn sqlite_options(&self) -> SqliteOptions {
        SqliteOptions {
            path: self.storage_path.clone(),
            max_connections: self.db_max_connections,
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.storage_backend {
            StorageBackend::Sqlite => tracing::info!("  Storage: sqlite ({})", self.storage_path),
            StorageBackend::Memory => tracing::info!("  Storage: memory (not persisted)"),
        }
        tracing::info!("  Alias length: {}", self.alias_length);
    }
}

/// Reads and parses an optional variable. Unset or empty yields `None`.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value '{}'", name, v)),
        _ => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
