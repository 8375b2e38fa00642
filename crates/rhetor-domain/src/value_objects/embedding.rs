//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Vector representation of a query topic. Created per query and discarded
/// once the similarity search has run; it has no identity beyond its values.
///
/// ## Example
///
/// ```rust
/// use rhetor_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3],
///     model: "text-embedding-3-small".to_string(),
///     dimensions: 3,
/// };
/// assert!(!embedding.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Whether the vector carries no values
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }
}
