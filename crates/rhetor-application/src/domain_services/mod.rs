//! Domain Services
//!
//! Pure functions of the pipeline that perform no I/O.

/// Prompt assembly
pub mod prompt;

pub use prompt::{PromptBuilder, STYLE_CHARACTERISTICS};
