//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of a query |
//! | [`SpeechChunk`] | Retrieved reference passage |
//! | [`IndexMatch`] | Raw similarity match with loose metadata |
//! | [`IndexStats`] | Statistics reported by the vector index |
//! | [`LengthCategory`] | Requested statement length |
//! | [`GenerationRequest`] | Validated statement generation request |
//! | [`GenerationResult`] | Generated statement with echoed parameters |

/// Semantic embedding value objects
pub mod embedding;
/// Generation request and result value objects
pub mod generation;
/// Retrieval value objects
pub mod speech;

pub use embedding::Embedding;
pub use generation::{
    GenerationRequest, GenerationResult, LengthCategory, validate_temperature, validate_topic,
};
pub use speech::{IndexMatch, IndexStats, SpeechChunk};
