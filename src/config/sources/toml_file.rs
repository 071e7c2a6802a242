//! File config source: strict loader for `rest_api.toml`.

use std::fs;
use std::path::Path;
use toml::Table;
use tracing::debug;

use crate::config::RestApiConfig;
use crate::error::ConfigurationError;

/// Load gateway configuration from a TOML file.
///
/// A missing file is not an error: the source contributes nothing and the
/// returned configuration is all-unset. Unknown keys are a hard error so a
/// typo never silently drops a setting.
pub fn load_toml_config(path: &Path) -> Result<RestApiConfig, ConfigurationError> {
    if !path.exists() {
        debug!(
            config_path = %path.display(),
            "Skipping config file: file does not exist"
        );
        return Ok(RestApiConfig::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table: Table = raw
        .parse()
        .map_err(|source| ConfigurationError::InvalidToml {
            path: path.to_path_buf(),
            source,
        })?;

    // Validate the key set before typed extraction so the error names the
    // offending keys exactly.
    let invalid_keys: Vec<String> = table
        .keys()
        .filter(|key| !RestApiConfig::KEYS.contains(&key.as_str()))
        .cloned()
        .collect();
    if !invalid_keys.is_empty() {
        return Err(ConfigurationError::UnknownKeys {
            keys: invalid_keys.join(", "),
            path: path.to_path_buf(),
        });
    }

    let config: RestApiConfig =
        table
            .try_into()
            .map_err(|source| ConfigurationError::InvalidToml {
                path: path.to_path_buf(),
                source,
            })?;

    debug!(config_path = %path.display(), "Loaded config file");
    Ok(config)
}
