/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed client configuration and a ready PlivoClient
[POS]:    Configuration layer - credentials and connection settings
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::{
    ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL, PlivoClient, PlivoError, Result,
};

/// File-backed client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlivoConfig {
    /// Account auth id
    #[serde(default)]
    pub auth_id: String,
    /// Account auth token
    #[serde(default)]
    pub auth_token: String,
    /// API host
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API version path segment
    #[serde(default = "default_version")]
    pub version: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl PlivoConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlivoError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PlivoError::Config(format!("invalid YAML: {e}")))
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            version: self.version.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    /// Build a client; empty credentials fail with `MissingCredential`
    pub fn into_client(self) -> Result<PlivoClient> {
        let config = self.client_config();
        PlivoClient::with_config(self.auth_id, self.auth_token, config)
    }
}
