//! Retrieval Value Objects
//!
//! Passages returned by the vector index and the statistics the index
//! reports about itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Value Object: Retrieved Speech Passage
///
/// A passage of a reference speech returned by similarity search. Owned by a
/// single search call and never mutated after construction.
///
/// ## Business Rules
///
/// - Score is the index similarity, higher is more similar
/// - Missing metadata fields become empty strings rather than failing the search
///
/// ## Example
///
/// ```rust
/// use rhetor_domain::value_objects::SpeechChunk;
///
/// let chunk = SpeechChunk {
///     text: "Yes we can.".to_string(),
///     title: "Election Night".to_string(),
///     date: "2008-11-04".to_string(),
///     url: "https://example.org/speech".to_string(),
///     score: 0.91,
/// };
/// assert_eq!(chunk.preview(3), "Yes");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeechChunk {
    /// Passage text
    pub text: String,
    /// Title of the speech the passage comes from
    pub title: String,
    /// Date the speech was given
    pub date: String,
    /// Source URL of the speech
    pub url: String,
    /// Similarity score reported by the index
    pub score: f64,
}

impl SpeechChunk {
    /// First `max_chars` characters of the passage text
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

/// A raw similarity match as returned by a vector index
///
/// Metadata is kept as loose JSON; mapping it into a [`SpeechChunk`] is the
/// pipeline's job, so index providers stay schema-agnostic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexMatch {
    /// Identifier of the stored vector
    pub id: String,
    /// Similarity score, higher is more similar
    pub score: f64,
    /// Metadata stored alongside the vector
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

/// Statistics reported by a vector index
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexStats {
    /// Total number of vectors stored across namespaces
    pub total_vector_count: u64,
    /// Dimensionality of the stored vectors, when reported
    pub dimension: Option<usize>,
}

impl IndexStats {
    /// Whether the index holds no vectors
    pub fn is_empty(&self) -> bool {
        self.total_vector_count == 0
    }
}
