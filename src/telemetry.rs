//! Tracing subscriber installation.

use crate::settings::LoggingSettings;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    filter::ParseError,
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// Rejected directive.
        directive: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over [`LoggingSettings::level`].
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for an unparsable level or
/// [`TelemetryError::Init`] when a subscriber is already installed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = env_filter(&settings.level)?;
    let fmt_layer = if settings.json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    Registry::default().with(filter).with(fmt_layer).try_init()?;
    Ok(())
}

fn env_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidFilter {
            directive: level.to_owned(),
            source,
        })
    })
}
