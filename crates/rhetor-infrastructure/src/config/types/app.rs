//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{GenerationConfig, HttpConfig, LoggingConfig, ProvidersConfig};

/// Main application configuration
///
/// Every section has defaults, so an empty file (or no file at all) is a
/// valid configuration apart from the API keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// External service providers
    pub providers: ProvidersConfig,

    /// Generation defaults
    pub generation: GenerationConfig,

    /// Outbound HTTP settings
    pub http: HttpConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Copy safe to print or log
    pub fn redacted(&self) -> Self {
        Self {
            providers: self.providers.redacted(),
            ..self.clone()
        }
    }
}
