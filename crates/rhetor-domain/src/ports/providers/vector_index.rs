use crate::error::Result;
use crate::value_objects::{IndexMatch, IndexStats};
use async_trait::async_trait;

/// Vector Similarity Search Interface
///
/// Queries an external vector database holding reference passages. The index
/// itself is owned by the external service; implementations only hold
/// credentials and endpoint identifiers.
///
/// # Example
///
/// ```ignore
/// use rhetor_domain::ports::providers::VectorIndexProvider;
///
/// let stats = index.describe_stats().await?;
/// println!("Index holds {} vectors", stats.total_vector_count);
///
/// let matches = index.query(&embedding.vector, 3).await?;
/// for m in matches {
///     println!("{} (score: {:.2})", m.id, m.score);
/// }
/// ```
#[async_trait]
pub trait VectorIndexProvider: Send + Sync {
    /// Find the `top_k` vectors most similar to `vector`, metadata included
    ///
    /// # Returns
    /// Matches in the order the index returned them (descending similarity)
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<IndexMatch>>;

    /// Fetch index statistics
    ///
    /// Used once at pipeline construction to fail fast on an unreachable
    /// or empty index.
    async fn describe_stats(&self) -> Result<IndexStats>;

    /// Name of the index being queried
    fn index_name(&self) -> &str;

    /// Name/identifier of this provider implementation (e.g. "pinecone")
    fn provider_name(&self) -> &str;
}
