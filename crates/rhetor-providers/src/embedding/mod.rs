//! Embedding Provider Implementations
//!
//! Converts query text into dense vectors for similarity search.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | OpenAIEmbeddingProvider | API | OpenAI text-embedding-3 models |

#[cfg(feature = "embedding-openai")]
pub mod openai;

#[cfg(feature = "embedding-openai")]
pub use openai::OpenAIEmbeddingProvider;
