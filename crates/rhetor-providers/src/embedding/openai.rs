//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API.
//! Supports text-embedding-3-small, text-embedding-3-large, and ada-002.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use rhetor_domain::error::{Error, Result, UpstreamStage};
use rhetor_domain::ports::providers::EmbeddingProvider;
use rhetor_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, OPENAI_DEFAULT_BASE_URL,
};
use crate::utils::HttpResponseUtils;
use crate::utils::constructor;

const PROVIDER_NAME: &str = "openai";

/// OpenAI embedding provider
///
/// Implements the `EmbeddingProvider` domain port using OpenAI's embedding API.
/// Receives HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use rhetor_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = OpenAIEmbeddingProvider::new(
///         "sk-your-api-key".to_string(),
///         None,
///         "text-embedding-3-small".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::get_effective_url(base_url.as_deref(), OPENAI_DEFAULT_BASE_URL),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send embedding request and get response data
    async fn fetch_embedding(&self, text: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": text,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::request_error(
                    UpstreamStage::Embedding,
                    "OpenAI",
                    self.timeout,
                    &e,
                )
            })?;

        HttpResponseUtils::check_and_parse(response, UpstreamStage::Embedding, "OpenAI").await
    }

    /// Parse the embedding vector from response data
    fn parse_embedding(&self, response_data: &serde_json::Value) -> Result<Embedding> {
        let vector = response_data["data"][0]["embedding"]
            .as_array()
            .ok_or_else(|| {
                Error::embedding("Invalid response format: missing data[0].embedding")
            })?
            .iter()
            .map(|v| {
                v.as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| Error::embedding("Embedding contains a non-numeric value"))
            })
            .collect::<Result<Vec<f32>>>()?;

        if vector.is_empty() {
            return Err(Error::embedding("Embedding service returned an empty vector"));
        }

        Ok(Embedding {
            dimensions: vector.len(),
            vector,
            model: self.model.clone(),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        if text.trim().is_empty() {
            return Err(Error::validation("Cannot embed empty text"));
        }

        let response_data = self.fetch_embedding(text).await?;
        let embedding = self.parse_embedding(&response_data)?;
        debug!(
            model = %self.model,
            dimensions = embedding.dimensions,
            "Embedded query text"
        );
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
            "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_ADA,
            _ => EMBEDDING_DIMENSION_OPENAI_SMALL,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}
