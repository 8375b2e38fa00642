//! Use Case Implementations

/// Retrieval-augmented speech generation pipeline
pub mod speech_service;

pub use speech_service::SpeechService;
