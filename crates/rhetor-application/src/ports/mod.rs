//! Application Ports
//!
//! Service interfaces exposed to presentation layers, plus re-exports of the
//! provider ports defined in `rhetor-domain`.

/// Service interfaces
pub mod services;

pub use rhetor_domain::ports::providers::{
    EmbeddingProvider, GenerationParams, GenerationProvider, VectorIndexProvider,
};
pub use services::SpeechServiceInterface;
