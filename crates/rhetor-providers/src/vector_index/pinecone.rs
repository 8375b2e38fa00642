//! Pinecone Vector Index Provider
//!
//! Implements the VectorIndexProvider port against Pinecone's REST API.
//! The index host is looked up once through the control plane unless it is
//! configured explicitly; queries and statistics go to the data plane.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::debug;

use rhetor_domain::error::{Error, Result, UpstreamStage};
use rhetor_domain::ports::providers::VectorIndexProvider;
use rhetor_domain::value_objects::{IndexMatch, IndexStats};

use crate::constants::{
    CONTENT_TYPE_JSON, PINECONE_API_KEY_HEADER, PINECONE_API_VERSION,
    PINECONE_API_VERSION_HEADER, PINECONE_CONTROL_PLANE_URL,
};
use crate::utils::constructor;
use crate::utils::{HttpResponseUtils, JsonExt};

const PROVIDER_NAME: &str = "pinecone";

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<IndexMatch>,
}

/// Pinecone vector index provider
///
/// ## Example
///
/// ```rust,no_run
/// use rhetor_providers::vector_index::PineconeVectorIndexProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// async fn example() -> rhetor_domain::Result<()> {
///     let provider = PineconeVectorIndexProvider::connect(
///         "pc-your-api-key".to_string(),
///         "obama-speeches".to_string(),
///         None,
///         None,
///         None,
///         Duration::from_secs(30),
///         Client::new(),
///     )
///     .await?;
///     println!("Querying {}", provider.host());
///     Ok(())
/// }
/// ```
pub struct PineconeVectorIndexProvider {
    api_key: String,
    index_name: String,
    host: String,
    namespace: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl PineconeVectorIndexProvider {
    /// Create a provider for an index whose data-plane host is already known
    pub fn new(
        api_key: String,
        index_name: String,
        host: &str,
        namespace: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            index_name,
            host: constructor::ensure_scheme(host),
            namespace: namespace.filter(|ns| !ns.trim().is_empty()),
            timeout,
            http_client,
        }
    }

    /// Create a provider, resolving the host through the control plane when absent
    ///
    /// # Arguments
    /// * `api_key` - Pinecone API key
    /// * `index_name` - Name of an existing index
    /// * `host` - Data-plane host; looked up when `None`
    /// * `control_plane_url` - Override for the control plane (defaults to Pinecone's)
    /// * `namespace` - Namespace to query; the default namespace when `None`
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub async fn connect(
        api_key: String,
        index_name: String,
        host: Option<String>,
        control_plane_url: Option<String>,
        namespace: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Result<Self> {
        let host = match host.filter(|h| !h.trim().is_empty()) {
            Some(host) => host,
            None => {
                let control_plane = constructor::get_effective_url(
                    control_plane_url.as_deref(),
                    PINECONE_CONTROL_PLANE_URL,
                );
                Self::resolve_host(&http_client, &control_plane, &api_key, &index_name, timeout)
                    .await?
            }
        };

        Ok(Self::new(
            api_key,
            index_name,
            &host,
            namespace,
            timeout,
            http_client,
        ))
    }

    /// Look up the data-plane host of `index_name`
    ///
    /// A missing index is a configuration problem, not an outage.
    pub async fn resolve_host(
        http_client: &Client,
        control_plane_url: &str,
        api_key: &str,
        index_name: &str,
        timeout: Duration,
    ) -> Result<String> {
        let response = http_client
            .get(format!("{control_plane_url}/indexes/{index_name}"))
            .header(PINECONE_API_KEY_HEADER, api_key.trim())
            .header(PINECONE_API_VERSION_HEADER, PINECONE_API_VERSION)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                HttpResponseUtils::request_error(UpstreamStage::VectorIndex, "Pinecone", timeout, &e)
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::configuration(format!(
                "Pinecone index '{index_name}' does not exist"
            )));
        }

        let description =
            HttpResponseUtils::check_and_parse(response, UpstreamStage::VectorIndex, "Pinecone")
                .await?;
        let host = description.opt_str("host").ok_or_else(|| {
            Error::vector_index(format!("Pinecone index '{index_name}' has no host"))
        })?;

        debug!(index = index_name, host, "Resolved Pinecone index host");
        Ok(host.to_string())
    }

    /// Data-plane host queries are sent to
    pub fn host(&self) -> &str {
        &self.host
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http_client
            .post(format!("{}/{path}", self.host))
            .header(PINECONE_API_KEY_HEADER, &self.api_key)
            .header(PINECONE_API_VERSION_HEADER, PINECONE_API_VERSION)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
    }

    async fn send(&self, request: RequestBuilder) -> Result<serde_json::Value> {
        let response = request.send().await.map_err(|e| {
            HttpResponseUtils::request_error(
                UpstreamStage::VectorIndex,
                "Pinecone",
                self.timeout,
                &e,
            )
        })?;
        HttpResponseUtils::check_and_parse(response, UpstreamStage::VectorIndex, "Pinecone").await
    }
}

#[async_trait]
impl VectorIndexProvider for PineconeVectorIndexProvider {
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<IndexMatch>> {
        let mut payload = serde_json::json!({
            "vector": vector,
            "topK": top_k,
            "includeMetadata": true,
            "includeValues": false,
        });
        if let Some(namespace) = &self.namespace {
            payload["namespace"] = serde_json::Value::from(namespace.as_str());
        }

        let response_data = self.send(self.post("query").json(&payload)).await?;
        let parsed: QueryResponse = serde_json::from_value(response_data).map_err(|e| {
            Error::vector_index_with_source("Invalid Pinecone query response", e)
        })?;

        debug!(
            index = %self.index_name,
            top_k,
            returned = parsed.matches.len(),
            "Pinecone query complete"
        );
        Ok(parsed.matches)
    }

    async fn describe_stats(&self) -> Result<IndexStats> {
        let stats = self
            .send(self.post("describe_index_stats").json(&serde_json::json!({})))
            .await?;

        let total_vector_count = match &self.namespace {
            Some(namespace) => stats["namespaces"][namespace.as_str()].u64_or("vectorCount", 0),
            None => stats.u64_or("totalVectorCount", 0),
        };

        Ok(IndexStats {
            total_vector_count,
            dimension: stats
                .opt_u64("dimension")
                .and_then(|d| usize::try_from(d).ok()),
        })
    }

    fn index_name(&self) -> &str {
        &self.index_name
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}
