//! Domain Layer - Rhetor
//!
//! Core types of the retrieval-augmented speech generator: the error
//! taxonomy, request-scoped value objects and the ports for the three
//! external services (embedding, vector index, generation).
//!
//! This crate performs no I/O.

/// Domain constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// External service ports
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, ErrorKind, Result, UpstreamStage};
