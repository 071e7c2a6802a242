//! Logging setup for the gateway process.
//!
//! Structured logging via the `tracing` crate. The library only emits
//! events; the consuming binary calls [`init_logging`] once at startup.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level when set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigurationError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level));
    let filter = filter.map_err(|e| {
        ConfigurationError::Logging(format!("invalid log level '{}': {}", config.level, e))
    })?;

    let registry = Registry::default().with(filter);
    match config.format.as_str() {
        "json" => registry.with(fmt::layer().json()).init(),
        "text" => registry.with(fmt::layer().with_ansi(config.color)).init(),
        other => {
            return Err(ConfigurationError::Logging(format!(
                "unknown log format '{}', expected 'text' or 'json'",
                other
            )))
        }
    }
    Ok(())
}
