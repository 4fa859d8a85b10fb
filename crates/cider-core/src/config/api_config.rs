use serde::{Deserialize, Serialize};

use super::defaults;

/// SkyPortal API connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the SkyPortal instance.
    pub instance_url: String,
    /// API token. Falls back to the `SKYPORTAL_TOKEN` environment variable.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum retry attempts for transient failures.
    pub max_retries: u32,
    /// Initial backoff in milliseconds (doubles each retry).
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in seconds.
    pub max_backoff_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            instance_url: defaults::DEFAULT_INSTANCE_URL.to_string(),
            token: None,
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_secs: defaults::DEFAULT_MAX_BACKOFF_SECS,
        }
    }
}
