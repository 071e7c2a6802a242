//! REST gateway configuration.
//!
//! The gateway resolves its startup configuration from three sources —
//! explicit caller-supplied values, an optional TOML file, and hard-coded
//! defaults — merged field-by-field with the highest-priority source winning.
//! Every field is optional so that "not set by this source" stays
//! distinguishable from an explicitly empty value all the way through the
//! merge. Tests included.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use toml::{Table, Value};

use crate::error::ConfigurationError;

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::resolve_config;
pub use merge::merge_policy::merge_config;
pub use paths::config_file_path;
pub use sources::toml_file::load_toml_config;

/// Gateway configuration record.
///
/// A value of this type represents the contribution of a single source
/// (or the result of merging several). It is never mutated after
/// construction; merging builds a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestApiConfig {
    /// Addresses to listen on, `host:port` form.
    #[serde(
        default,
        deserialize_with = "bind_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub bind: Option<Vec<String>>,

    /// Upstream validator endpoint URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect: Option<String>,

    /// Client request timeout, seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,

    /// OpenTSDB database name for the optional metrics integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opentsdb_db: Option<String>,

    /// OpenTSDB endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opentsdb_url: Option<String>,

    /// OpenTSDB credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opentsdb_username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opentsdb_password: Option<String>,
}

/// Accept either a single `host:port` string or an array of them.
fn bind_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        OneOrMany::One(addr) => vec![addr],
        OneOrMany::Many(addrs) => addrs,
    }))
}

impl RestApiConfig {
    /// The full recognized key set, in canonical output order.
    pub const KEYS: [&'static str; 7] = [
        "bind",
        "connect",
        "timeout",
        "opentsdb_db",
        "opentsdb_url",
        "opentsdb_username",
        "opentsdb_password",
    ];

    /// Baseline configuration used as the lowest-priority merge source.
    pub fn defaults() -> Self {
        Self {
            bind: Some(vec!["127.0.0.1:8008".to_string()]),
            connect: Some("tcp://localhost:4004".to_string()),
            timeout: Some(300),
            opentsdb_db: None,
            opentsdb_url: None,
            opentsdb_username: None,
            opentsdb_password: None,
        }
    }

    /// Key/value view of the set fields, in canonical key order.
    pub fn to_mapping(&self) -> Table {
        let mut mapping = Table::new();
        if let Some(bind) = &self.bind {
            let addrs = bind.iter().cloned().map(Value::String).collect();
            mapping.insert("bind".to_string(), Value::Array(addrs));
        }
        if let Some(connect) = &self.connect {
            mapping.insert("connect".to_string(), Value::String(connect.clone()));
        }
        if let Some(timeout) = self.timeout {
            mapping.insert("timeout".to_string(), Value::Integer(timeout));
        }
        if let Some(db) = &self.opentsdb_db {
            mapping.insert("opentsdb_db".to_string(), Value::String(db.clone()));
        }
        if let Some(url) = &self.opentsdb_url {
            mapping.insert("opentsdb_url".to_string(), Value::String(url.clone()));
        }
        if let Some(username) = &self.opentsdb_username {
            mapping.insert(
                "opentsdb_username".to_string(),
                Value::String(username.clone()),
            );
        }
        if let Some(password) = &self.opentsdb_password {
            mapping.insert(
                "opentsdb_password".to_string(),
                Value::String(password.clone()),
            );
        }
        mapping
    }

    /// TOML-syntax `key = value` lines for the set fields, in canonical key
    /// order. Reparsing the joined lines yields an equal configuration.
    pub fn to_toml_lines(&self) -> Result<Vec<String>, ConfigurationError> {
        let mut lines = Vec::new();
        for (key, value) in self.to_mapping() {
            let mut entry = Table::new();
            entry.insert(key, value);
            lines.push(toml::to_string(&entry)?.trim_end().to_string());
        }
        Ok(lines)
    }
}

impl fmt::Display for RestApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RestApiConfig(")?;
        let mut sep = "";
        if let Some(bind) = &self.bind {
            write!(f, "{}bind={:?}", sep, bind)?;
            sep = ", ";
        }
        if let Some(connect) = &self.connect {
            write!(f, "{}connect={:?}", sep, connect)?;
            sep = ", ";
        }
        if let Some(timeout) = self.timeout {
            write!(f, "{}timeout={}", sep, timeout)?;
            sep = ", ";
        }
        if let Some(db) = &self.opentsdb_db {
            write!(f, "{}opentsdb_db={:?}", sep, db)?;
            sep = ", ";
        }
        if let Some(url) = &self.opentsdb_url {
            write!(f, "{}opentsdb_url={:?}", sep, url)?;
            sep = ", ";
        }
        if let Some(username) = &self.opentsdb_username {
            write!(f, "{}opentsdb_username={:?}", sep, username)?;
            sep = ", ";
        }
        // Never render the credential itself
        if self.opentsdb_password.is_some() {
            write!(f, "{}opentsdb_password=<set>", sep)?;
        }
        write!(f, ")")
    }
}
