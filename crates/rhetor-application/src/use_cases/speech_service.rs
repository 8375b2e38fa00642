//! Speech Service Use Case
//!
//! Composes the embedding, vector index and generation providers into the
//! two operations presentation layers use: passage search and statement
//! generation. Each call runs the stages strictly in sequence.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use rhetor_domain::constants::{
    GENERATION_EXAMPLE_COUNT, METADATA_DATE, METADATA_TEXT, METADATA_TITLE, METADATA_URL,
    SEARCH_MAX_RESULTS,
};
use rhetor_domain::error::{Error, Result};
use rhetor_domain::value_objects::{
    GenerationRequest, GenerationResult, IndexMatch, IndexStats, SpeechChunk, validate_topic,
};

use crate::domain_services::PromptBuilder;
use crate::ports::services::SpeechServiceInterface;
use crate::ports::{EmbeddingProvider, GenerationParams, GenerationProvider, VectorIndexProvider};

/// Read a string metadata field, defaulting to empty
fn metadata_str(metadata: &HashMap<String, Value>, key: &str) -> String {
    metadata
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Map a raw index match into a speech passage
fn match_to_chunk(m: IndexMatch) -> SpeechChunk {
    SpeechChunk {
        text: metadata_str(&m.metadata, METADATA_TEXT),
        title: metadata_str(&m.metadata, METADATA_TITLE),
        date: metadata_str(&m.metadata, METADATA_DATE),
        url: metadata_str(&m.metadata, METADATA_URL),
        score: m.score,
    }
}

/// Speech service implementation - the pipeline facade
///
/// Holds only shared, immutable handles to its providers, so one instance
/// can serve any number of concurrent callers behind an `Arc`.
pub struct SpeechService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_index: Arc<dyn VectorIndexProvider>,
    generation_provider: Arc<dyn GenerationProvider>,
    prompt_builder: PromptBuilder,
    index_stats: IndexStats,
}

impl SpeechService {
    /// Create the service after checking the vector index is usable
    ///
    /// Fetches index statistics once so an unreachable index surfaces here
    /// as an upstream error, and an empty one as a configuration error,
    /// instead of on the first request.
    pub async fn connect(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndexProvider>,
        generation_provider: Arc<dyn GenerationProvider>,
        prompt_builder: PromptBuilder,
    ) -> Result<Self> {
        let index_stats = vector_index.describe_stats().await?;

        if index_stats.is_empty() {
            return Err(Error::configuration(format!(
                "Vector index '{}' contains no vectors; upload reference passages first",
                vector_index.index_name()
            )));
        }

        info!(
            index = vector_index.index_name(),
            provider = vector_index.provider_name(),
            total_vectors = index_stats.total_vector_count,
            "Connected to vector index"
        );

        Ok(Self {
            embedding_provider,
            vector_index,
            generation_provider,
            prompt_builder,
            index_stats,
        })
    }

}

#[async_trait]
impl SpeechServiceInterface for SpeechService {
    #[instrument(skip(self))]
    async fn search_relevant(&self, topic: &str, n: usize) -> Result<Vec<SpeechChunk>> {
        validate_topic(topic)?;
        if n == 0 {
            return Err(Error::validation("Result count must be at least 1"));
        }
        if n > SEARCH_MAX_RESULTS {
            return Err(Error::validation(format!(
                "Result count must be at most {SEARCH_MAX_RESULTS}, got {n}"
            )));
        }

        let query_embedding = self.embedding_provider.embed(topic).await?;
        let matches = self.vector_index.query(&query_embedding.vector, n).await?;

        if matches.len() > n {
            warn!(
                requested = n,
                returned = matches.len(),
                "Index returned more matches than requested, truncating"
            );
        }

        let chunks: Vec<SpeechChunk> = matches.into_iter().take(n).map(match_to_chunk).collect();
        debug!(found = chunks.len(), "Retrieved relevant passages");
        Ok(chunks)
    }

    #[instrument(
        skip(self, request),
        fields(topic = %request.topic, length = %request.length, model = %request.model)
    )]
    async fn generate_statement(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        request.validate()?;

        let chunks = self
            .search_relevant(&request.topic, GENERATION_EXAMPLE_COUNT)
            .await?;
        let prompt = self
            .prompt_builder
            .build(&request.topic, &chunks, request.length);

        info!(
            examples = chunks.len(),
            temperature = request.temperature,
            "Generating statement"
        );

        let params = GenerationParams {
            model: &request.model,
            temperature: request.temperature,
            max_output_tokens: request.length.max_output_tokens(),
        };
        let text = self
            .generation_provider
            .generate(&prompt, params)
            .await?
            .ok_or_else(|| Error::empty_result(&request.model))?;

        Ok(GenerationResult {
            text,
            topic: request.topic.clone(),
            length: request.length,
            temperature: request.temperature,
            model: request.model.clone(),
            example_count: chunks.len(),
        })
    }

    fn index_stats(&self) -> &IndexStats {
        &self.index_stats
    }
}
