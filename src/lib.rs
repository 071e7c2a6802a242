//! REST Gateway Configuration
//!
//! Startup configuration resolution for the REST API gateway: hard-coded
//! defaults, an optional `rest_api.toml` file, and explicit caller-supplied
//! values, merged field-by-field with the highest-priority source winning.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    config_file_path, load_toml_config, merge_config, resolve_config, RestApiConfig,
};
pub use error::ConfigurationError;
pub use logging::{init_logging, LoggingConfig};
