use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{Result, SolrError};

const REQUIRED_KEYS: [&str; 1] = ["base_url"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Core or collection URL, e.g. `http://localhost:8983/solr/books`.
    pub base_url: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub basic_auth: Option<BasicAuth>,
    /// Anything else, kept untouched for custom transports.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: None,
            headers: BTreeMap::new(),
            basic_auth: None,
            options: Map::new(),
        }
    }

    pub fn from_map(config: Map<String, Value>) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !config.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(SolrError::InvalidArgument(format!(
                "Config is missing the following keys: \"{}\".",
                missing.join(", ")
            )));
        }

        serde_json::from_value(Value::Object(config))
            .map_err(|e| SolrError::InvalidArgument(format!("Invalid client config: {}", e)))
    }

    /// Reads the config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SolrError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let table: toml::Table = toml::from_str(&content).map_err(|e| {
            SolrError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        match serde_json::to_value(table)? {
            Value::Object(map) => Self::from_map(map),
            _ => Err(SolrError::Config(format!(
                "Config file {} is not a table",
                path.display()
            ))),
        }
    }

    /// Reads `SOLR_URL` and the optional `SOLR_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Map::new();
        if let Ok(url) = std::env::var("SOLR_URL") {
            config.insert("base_url".to_string(), Value::String(url));
        }
        if let Ok(timeout) = std::env::var("SOLR_TIMEOUT_SECONDS") {
            let seconds: u64 = timeout.parse().map_err(|_| {
                SolrError::InvalidArgument(format!(
                    "SOLR_TIMEOUT_SECONDS must be a number, \"{}\" given.",
                    timeout
                ))
            })?;
            config.insert("timeout_seconds".to_string(), Value::from(seconds));
        }
        Self::from_map(config)
    }

    /// `{base_url}/{endpoint}` without doubled slashes.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}
