//! Generation Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | OpenAIGenerationProvider | API | OpenAI chat completions (gpt-4, gpt-3.5-turbo) |

#[cfg(feature = "generation-openai")]
pub mod openai;

#[cfg(feature = "generation-openai")]
pub use openai::OpenAIGenerationProvider;
