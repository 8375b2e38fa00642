use crate::error::Result;
use async_trait::async_trait;

/// Parameters of a single generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
}

/// Language Model Generation Interface
///
/// Sends one prompt as a single user message, with no conversation history.
///
/// # Returns
///
/// `Ok(Some(text))` on success, `Ok(None)` when the service answered but
/// produced no usable text, and an error when the service could not be
/// reached or rejected the request. Callers can therefore tell "reachable,
/// nothing generated" apart from "unreachable".
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate text for `prompt`
    async fn generate(&self, prompt: &str, params: GenerationParams<'_>)
    -> Result<Option<String>>;

    /// Name/identifier of this provider implementation (e.g. "openai")
    fn provider_name(&self) -> &str;
}
