//! Pipeline Bootstrap - composition root
//!
//! Turns an [`AppConfig`] into a ready [`SpeechService`]:
//!
//! ```text
//! AppConfig → HttpClientConfig → reqwest::Client ─┬→ OpenAIEmbeddingProvider
//!                                                 ├→ PineconeVectorIndexProvider
//!                                                 └→ OpenAIGenerationProvider
//!                                                          ↓
//!                                  SpeechService::connect (index stats check)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?).await?;
//! let chunks = context.speech_service().search_relevant("jobs", 5).await?;
//! ```

use std::sync::Arc;

use rhetor_application::domain_services::PromptBuilder;
use rhetor_application::use_cases::SpeechService;
use rhetor_domain::error::Result;
use rhetor_domain::ports::providers::{
    EmbeddingProvider, GenerationProvider, VectorIndexProvider,
};
use rhetor_providers::embedding::OpenAIEmbeddingProvider;
use rhetor_providers::generation::OpenAIGenerationProvider;
use rhetor_providers::vector_index::PineconeVectorIndexProvider;
use tracing::info;

use crate::config::AppConfig;

/// Application context: configuration plus the connected pipeline
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    speech_service: Arc<SpeechService>,
}

impl AppContext {
    /// Connected pipeline facade
    pub fn speech_service(&self) -> Arc<SpeechService> {
        Arc::clone(&self.speech_service)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config.redacted())
            .finish_non_exhaustive()
    }
}

/// Build providers from configuration and connect the pipeline
///
/// Missing API keys are configuration errors; an unreachable or empty
/// index fails here rather than on the first request.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let openai_key = config.providers.openai_api_key()?.to_string();
    let pinecone_key = config.providers.pinecone_api_key()?.to_string();

    let timeout = config.http.timeout();
    let http_client = config.http.client_config().build_client()?;

    let openai = &config.providers.openai;
    let embedding: Arc<dyn EmbeddingProvider> = Arc::new(OpenAIEmbeddingProvider::new(
        openai_key.clone(),
        openai.base_url.clone(),
        openai.embedding_model.clone(),
        timeout,
        http_client.clone(),
    ));
    let generation: Arc<dyn GenerationProvider> = Arc::new(OpenAIGenerationProvider::new(
        openai_key,
        openai.base_url.clone(),
        timeout,
        http_client.clone(),
    ));

    let pinecone = &config.providers.pinecone;
    let vector_index: Arc<dyn VectorIndexProvider> = Arc::new(
        PineconeVectorIndexProvider::connect(
            pinecone_key,
            pinecone.index_name.clone(),
            pinecone.host.clone(),
            pinecone.control_plane_url.clone(),
            pinecone.namespace.clone(),
            timeout,
            http_client,
        )
        .await?,
    );

    let speech_service = SpeechService::connect(
        embedding,
        vector_index,
        generation,
        PromptBuilder::new(config.generation.persona.clone()),
    )
    .await?;

    info!(
        persona = %config.generation.persona,
        model = %config.generation.model,
        embedding_model = %config.providers.openai.embedding_model,
        "Speech pipeline ready"
    );

    Ok(AppContext {
        config: Arc::new(config),
        speech_service: Arc::new(speech_service),
    })
}
