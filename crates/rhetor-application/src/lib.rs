//! Application Layer - Rhetor
//!
//! Orchestrates the retrieval-augmented generation pipeline:
//! query embedding → vector similarity search → prompt assembly → generation.
//!
//! ## Modules
//!
//! - `domain_services`: the pure prompt builder
//! - `ports`: the facade interface presentation layers call
//! - `use_cases`: [`SpeechService`], the facade implementation
//!
//! The crate depends only on `rhetor-domain`; concrete providers are injected
//! at construction time.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::PromptBuilder;
pub use ports::SpeechServiceInterface;
pub use use_cases::SpeechService;
