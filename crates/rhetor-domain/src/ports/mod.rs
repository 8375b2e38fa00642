//! Domain Port Interfaces
//!
//! Contracts for the external services the pipeline delegates to. All ports
//! are `Send + Sync` so a single pipeline can serve concurrent callers.

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, GenerationParams, GenerationProvider, VectorIndexProvider};
