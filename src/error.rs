//! Error types for REST gateway configuration resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading and resolution errors.
///
/// A missing config file is not one of these: the file source simply
/// contributes nothing and resolution falls through to lower-priority
/// sources. Everything here is fatal to startup and carries the source
/// path so the caller can log and abort.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Invalid keys in {}: {keys}", path.display())]
    UnknownKeys { keys: String, path: PathBuf },

    #[error("Failed to parse config file {}: {source}", path.display())]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid logging configuration: {0}")]
    Logging(String),
}
