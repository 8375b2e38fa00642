//! Configuration management
//!
//! Layered configuration: defaults, then a TOML file, then environment
//! variables. See [`ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{
    AppConfig, GenerationConfig, HttpConfig, LoggingConfig, OpenAIConfig, PineconeConfig,
    ProvidersConfig,
};
