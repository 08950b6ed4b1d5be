//! Client configuration

use crate::{ApiResult, RestClient};

/// Environment variable holding the backend base URL.
pub const ENV_API_URL: &str = "PAYDAY_API_URL";
/// Environment variable holding the request timeout in seconds.
pub const ENV_API_TIMEOUT: &str = "PAYDAY_API_TIMEOUT";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the payroll backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL including the API prefix
    /// (e.g. "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read configuration from the environment, with defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var(ENV_API_TIMEOUT)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a REST transport from this configuration
    pub fn build_rest_client(&self) -> ApiResult<RestClient> {
        RestClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
