//! Top-level configuration resolution for the gateway bootstrap.

use std::path::Path;
use tracing::debug;

use crate::config::merge::merge_policy::merge_config;
use crate::config::paths::config_file_path;
use crate::config::sources::toml_file::load_toml_config;
use crate::config::RestApiConfig;
use crate::error::ConfigurationError;

/// Resolve the effective gateway configuration.
///
/// Merges `[explicit (if any), file, defaults]` in that priority order,
/// where the file source is `<home>/etc/rest_api.toml`. Called once at
/// startup; file-loading errors propagate unchanged so the process can
/// abort instead of running with a partial configuration.
pub fn resolve_config(
    explicit: Option<RestApiConfig>,
    home: &Path,
) -> Result<RestApiConfig, ConfigurationError> {
    let file_config = load_toml_config(&config_file_path(home))?;

    let mut sources = Vec::new();
    if let Some(explicit) = explicit {
        sources.push(explicit);
    }
    sources.push(file_config);
    sources.push(RestApiConfig::defaults());

    let resolved = merge_config(&sources);
    debug!(config = %resolved, "Resolved gateway configuration");
    Ok(resolved)
}
