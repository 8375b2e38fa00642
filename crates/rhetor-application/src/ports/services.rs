//! Application Service Interfaces
//!
//! The pipeline facade as seen by presentation layers (CLI, web handlers).
//! Nothing in this contract mentions embeddings or vector indexes.

use async_trait::async_trait;
use rhetor_domain::error::Result;
use rhetor_domain::value_objects::{GenerationRequest, GenerationResult, IndexStats, SpeechChunk};

/// Retrieval-augmented speech generation interface
///
/// # Example
///
/// ```ignore
/// use rhetor_application::ports::SpeechServiceInterface;
///
/// let chunks = service.search_relevant("healthcare reform", 5).await?;
///
/// let request = GenerationRequest::new("healthcare reform", LengthCategory::Short, 0.7, "gpt-4");
/// match service.generate_statement(&request).await {
///     Ok(result) => println!("{}", result.text),
///     Err(e) if e.is_empty_result() => println!("nothing generated, try again"),
///     Err(e) => return Err(e),
/// }
/// ```
#[async_trait]
pub trait SpeechServiceInterface: Send + Sync {
    /// Retrieve at most `n` passages relevant to `topic`, most similar first
    async fn search_relevant(&self, topic: &str, n: usize) -> Result<Vec<SpeechChunk>>;

    /// Generate a statement about the request topic in the persona's style
    async fn generate_statement(&self, request: &GenerationRequest) -> Result<GenerationResult>;

    /// Index statistics captured when the service was constructed
    fn index_stats(&self) -> &IndexStats;
}
