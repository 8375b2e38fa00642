//! OpenAI Chat Generation Provider
//!
//! Sends the prompt as a single user message to the chat completions API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rhetor_domain::error::{Error, Result, UpstreamStage};
use rhetor_domain::ports::providers::{GenerationParams, GenerationProvider};

use crate::constants::{CONTENT_TYPE_JSON, OPENAI_DEFAULT_BASE_URL, OPENAI_ROLE_USER};
use crate::utils::HttpResponseUtils;
use crate::utils::constructor;

const PROVIDER_NAME: &str = "openai";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, `None` when absent or blank
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
    }
}

/// OpenAI chat completion provider
///
/// Implements the `GenerationProvider` domain port. The model, temperature
/// and token budget arrive per call, so a single instance serves every
/// request regardless of the model the user picked.
pub struct OpenAIGenerationProvider {
    api_key: String,
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIGenerationProvider {
    /// Create a new OpenAI generation provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::get_effective_url(base_url.as_deref(), OPENAI_DEFAULT_BASE_URL),
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GenerationProvider for OpenAIGenerationProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams<'_>,
    ) -> Result<Option<String>> {
        let payload = ChatCompletionRequest {
            model: params.model,
            messages: [ChatMessage {
                role: OPENAI_ROLE_USER,
                content: prompt,
            }],
            temperature: params.temperature,
            max_tokens: params.max_output_tokens,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::request_error(
                    UpstreamStage::Generation,
                    "OpenAI",
                    self.timeout,
                    &e,
                )
            })?;

        let response_data =
            HttpResponseUtils::check_and_parse(response, UpstreamStage::Generation, "OpenAI")
                .await?;
        let parsed: ChatCompletionResponse = serde_json::from_value(response_data)
            .map_err(|e| Error::generation_with_source("Invalid chat completion response", e))?;

        let text = parsed.into_text();
        match &text {
            Some(text) => debug!(model = params.model, chars = text.len(), "Generated text"),
            None => warn!(model = params.model, "Generation service returned no text"),
        }
        Ok(text)
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}
