use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text Embedding Interface
///
/// Turns free text into a fixed-length vector through an external embedding
/// service. The model is fixed for the lifetime of an implementation.
///
/// Implementations make a single attempt per call; there is no retry.
///
/// # Example
///
/// ```ignore
/// use rhetor_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("healthcare reform").await?;
/// println!("Embedding dimensions: {}", provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single non-empty text
    async fn embed(&self, text: &str) -> Result<Embedding>;

    /// Dimensionality of the vectors this provider produces
    fn dimensions(&self) -> usize;

    /// Model identifier used for every request
    fn model(&self) -> &str;

    /// Name/identifier of this provider implementation (e.g. "openai")
    fn provider_name(&self) -> &str;
}
