//! Merge rules: per-field precedence across ordered config sources.

use crate::config::RestApiConfig;

/// Merge configuration sources, highest priority first.
///
/// Selection is field-wise: each field takes the value from the first
/// source that sets it, so a lower-priority source can still contribute a
/// field a higher-priority source left unset. Never fails; an empty slice
/// yields an all-unset configuration.
pub fn merge_config(configs: &[RestApiConfig]) -> RestApiConfig {
    fn first<T: Clone>(
        configs: &[RestApiConfig],
        field: impl Fn(&RestApiConfig) -> &Option<T>,
    ) -> Option<T> {
        configs.iter().find_map(|config| field(config).clone())
    }

    RestApiConfig {
        bind: first(configs, |c| &c.bind),
        connect: first(configs, |c| &c.connect),
        timeout: first(configs, |c| &c.timeout),
        opentsdb_db: first(configs, |c| &c.opentsdb_db),
        opentsdb_url: first(configs, |c| &c.opentsdb_url),
        opentsdb_username: first(configs, |c| &c.opentsdb_username),
        opentsdb_password: first(configs, |c| &c.opentsdb_password),
    }
}
