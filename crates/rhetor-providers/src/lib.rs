//! # Rhetor Providers
//!
//! Adapters implementing the provider ports from `rhetor-domain` against
//! hosted services:
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI |
//! | Vector Index | `VectorIndexProvider` | Pinecone |
//! | Generation | `GenerationProvider` | OpenAI chat |
//!
//! Every provider receives a shared `reqwest::Client` built from
//! [`http::HttpClientConfig`] and tags its failures with the pipeline
//! stage that issued the request.
//!
//! ## Feature Flags
//!
//! - `embedding-openai`
//! - `vectorindex-pinecone`
//! - `generation-openai`

pub mod constants;
pub mod embedding;
pub mod generation;
pub mod http;
pub mod utils;
pub mod vector_index;

pub use http::HttpClientConfig;
pub use rhetor_domain::ports::providers::{
    EmbeddingProvider, GenerationParams, GenerationProvider, VectorIndexProvider,
};
