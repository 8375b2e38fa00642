//! External provider configuration types

use rhetor_domain::error::{Error, Result};
use rhetor_providers::constants::OPENAI_DEFAULT_EMBEDDING_MODEL;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INDEX_NAME, REDACTED};

/// OpenAI credentials and endpoints, shared by embedding and generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OpenAIConfig {
    /// API key (usually supplied through `OPENAI_API_KEY`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Custom base URL, e.g. for a compatible gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Embedding model; must match the model the index was built with
    pub embedding_model: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            embedding_model: OPENAI_DEFAULT_EMBEDDING_MODEL.to_string(),
        }
    }
}

/// Pinecone index location and credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PineconeConfig {
    /// API key (usually supplied through `PINECONE_API_KEY`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Name of the existing index holding speech passages
    pub index_name: String,

    /// Data-plane host; resolved through the control plane when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Control plane override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_plane_url: Option<String>,

    /// Namespace within the index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Default for PineconeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            index_name: DEFAULT_INDEX_NAME.to_string(),
            host: None,
            control_plane_url: None,
            namespace: None,
        }
    }
}

/// All external providers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProvidersConfig {
    /// OpenAI embeddings and chat completions
    pub openai: OpenAIConfig,

    /// Pinecone vector index
    pub pinecone: PineconeConfig,
}

impl ProvidersConfig {
    /// OpenAI API key, or a configuration error naming the variable to set
    pub fn openai_api_key(&self) -> Result<&str> {
        require_secret(self.openai.api_key.as_deref(), "OPENAI_API_KEY")
    }

    /// Pinecone API key, or a configuration error naming the variable to set
    pub fn pinecone_api_key(&self) -> Result<&str> {
        require_secret(self.pinecone.api_key.as_deref(), "PINECONE_API_KEY")
    }

    /// Copy with every secret replaced by a placeholder
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.openai.api_key.is_some() {
            copy.openai.api_key = Some(REDACTED.to_string());
        }
        if copy.pinecone.api_key.is_some() {
            copy.pinecone.api_key = Some(REDACTED.to_string());
        }
        copy
    }
}

fn require_secret<'a>(value: Option<&'a str>, env_var: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(secret) if !secret.is_empty() => Ok(secret),
        _ => Err(Error::configuration(format!(
            "Missing credential: set {env_var} in the environment or the configuration file"
        ))),
    }
}
