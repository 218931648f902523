//! Connection settings

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://cloudsearch.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Per-request timeout applied by the HTTP client
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Number of recent requests kept in the operation log
    #[serde(default = "default_operation_log_size")]
    pub operation_log_size: usize,
}

fn default_api_base_url() -> String {
    env::var("CLOUDSEARCH_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

fn default_api_version() -> String {
    env::var("CLOUDSEARCH_API_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string())
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("cloudsearch-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_operation_log_size() -> usize {
    50
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            operation_log_size: default_operation_log_size(),
        }
    }
}

impl ConnectionConfig {
    /// Config pointing at a different API root, e.g. a local emulator or mock server.
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
