//! HTTP client configuration types

use std::time::Duration;

use rhetor_providers::HttpClientConfig;
use rhetor_providers::constants::{
    HTTP_CLIENT_IDLE_TIMEOUT_SECS, HTTP_KEEPALIVE_SECS, HTTP_MAX_IDLE_PER_HOST,
    HTTP_REQUEST_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};

/// Outbound HTTP settings shared by every provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum idle connections kept per host
    pub max_idle_per_host: usize,

    /// Idle connection timeout in seconds
    pub idle_timeout_secs: u64,

    /// TCP keep-alive interval in seconds
    pub keepalive_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: HTTP_REQUEST_TIMEOUT_SECS,
            max_idle_per_host: HTTP_MAX_IDLE_PER_HOST,
            idle_timeout_secs: HTTP_CLIENT_IDLE_TIMEOUT_SECS,
            keepalive_secs: HTTP_KEEPALIVE_SECS,
        }
    }
}

impl HttpConfig {
    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Client configuration for the providers crate
    pub fn client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            max_idle_per_host: self.max_idle_per_host,
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
            keepalive: Duration::from_secs(self.keepalive_secs),
            timeout: self.timeout(),
            ..HttpClientConfig::default()
        }
    }
}
