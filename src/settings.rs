//! Layered runtime configuration.
//!
//! Values come from built-in defaults, then an optional
//! `config/tasktrack.{toml,yaml,json}` file, then `TASKTRACK__`-prefixed
//! environment variables (for example `TASKTRACK__DATABASE__URL`).

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::SecretString;
use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TASKTRACK";

/// Optional configuration file, without extension.
pub const CONFIG_FILE: &str = "config/tasktrack";

/// Top-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Database connection settings.
    pub database: DatabaseSettings,
    /// Log output settings.
    pub logging: LoggingSettings,
}

/// `PostgreSQL` pool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Connection URL; never logged.
    pub url: SecretString,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// Idle connections kept open; `None` keeps up to `max_connections`.
    pub min_idle: Option<u32>,
    /// Seconds to wait for a free connection.
    pub connection_timeout_secs: u64,
    /// Server-side statement timeout in milliseconds; `0` disables it.
    pub statement_timeout_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl Settings {
    /// Loads settings from the optional file and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is malformed or a required value
    /// such as `database.url` is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    /// Applies defaults beneath the sources already in `builder` and
    /// deserialises the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the merged values do not form valid
    /// settings.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("database.max_connections", 10)?
            .set_default("database.connection_timeout_secs", 5)?
            .set_default("database.statement_timeout_ms", 5000)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .build()?
            .try_deserialize()
    }
}
