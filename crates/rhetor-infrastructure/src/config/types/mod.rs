//! Configuration type definitions

mod app;
mod generation;
mod http;
mod logging;
mod providers;

pub use app::AppConfig;
pub use generation::GenerationConfig;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use providers::{OpenAIConfig, PineconeConfig, ProvidersConfig};
