//! External Service Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Text to vector embedding |
//! | [`VectorIndexProvider`] | Similarity search over stored passages |
//! | [`GenerationProvider`] | Prompt to generated text |

/// Embedding provider port
pub mod embedding;
/// Generation provider port
pub mod generation;
/// Vector index provider port
pub mod vector_index;

pub use embedding::EmbeddingProvider;
pub use generation::{GenerationParams, GenerationProvider};
pub use vector_index::VectorIndexProvider;
