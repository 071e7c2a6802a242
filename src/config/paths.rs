//! Config file location under the gateway home directory.

use std::path::{Path, PathBuf};

/// Path to the gateway config file: `<home>/etc/rest_api.toml`.
///
/// The home directory is an explicit input; callers resolve it from the
/// process environment at startup so this stays testable without touching
/// global state.
pub fn config_file_path(home: &Path) -> PathBuf {
    home.join("etc").join("rest_api.toml")
}
