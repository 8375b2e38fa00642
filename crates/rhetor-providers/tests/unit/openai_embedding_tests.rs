//! Tests for OpenAIEmbeddingProvider

use std::io::Write;
use std::time::Duration;

use mockito::{Matcher, Server};
use reqwest::Client;
use rhetor_domain::{ErrorKind, UpstreamStage};
use rhetor_providers::EmbeddingProvider;
use rhetor_providers::embedding::OpenAIEmbeddingProvider;
use serde_json::json;

fn provider(base_url: Option<String>, model: &str) -> OpenAIEmbeddingProvider {
    provider_with_timeout(base_url, model, Duration::from_secs(5))
}

fn provider_with_timeout(
    base_url: Option<String>,
    model: &str,
    timeout: Duration,
) -> OpenAIEmbeddingProvider {
    OpenAIEmbeddingProvider::new(
        "  test-key  ".to_string(),
        base_url,
        model.to_string(),
        timeout,
        Client::new(),
    )
}

#[test]
fn test_openai_provider_defaults() {
    let provider = provider(None, "text-embedding-3-small");
    assert_eq!(provider.provider_name(), "openai");
    assert_eq!(provider.model(), "text-embedding-3-small");
    assert_eq!(provider.dimensions(), 1536);
    assert_eq!(provider.base_url(), "https://api.openai.com/v1");

    let custom = provider_with_url("https://custom.openai.com/v1/");
    assert_eq!(custom.base_url(), "https://custom.openai.com/v1");
}

fn provider_with_url(url: &str) -> OpenAIEmbeddingProvider {
    provider(Some(url.to_string()), "text-embedding-3-small")
}

#[test]
fn test_openai_dimensions_by_model() {
    let models_and_dims = [
        ("text-embedding-3-small", 1536),
        ("text-embedding-3-large", 3072),
        ("text-embedding-ada-002", 1536),
        ("unknown-model", 1536),
    ];
    for (model, dims) in models_and_dims {
        assert_eq!(provider(None, model).dimensions(), dims, "{model}");
    }
}

#[tokio::test]
async fn test_openai_embed_with_mock_server() {
    let mut server = Server::new_async().await;
    let response_body = json!({
        "data": [{"embedding": [0.25, -0.5, 1.0]}],
        "model": "text-embedding-3-small"
    })
    .to_string();

    let mock = server
        .mock("POST", "/embeddings")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "input": "healthcare reform",
            "model": "text-embedding-3-small",
            "encoding_format": "float"
        })))
        .with_status(200)
        .with_body(response_body)
        .create_async()
        .await;

    let provider = provider(Some(server.url()), "text-embedding-3-small");
    let embedding = provider.embed("healthcare reform").await.unwrap();

    assert_eq!(embedding.vector, vec![0.25, -0.5, 1.0]);
    assert_eq!(embedding.dimensions, 3);
    assert_eq!(embedding.model, "text-embedding-3-small");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_embed_rejects_empty_text_without_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .expect(0)
        .create_async()
        .await;

    let provider = provider(Some(server.url()), "text-embedding-3-small");
    let err = provider.embed("   ").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_embed_auth_failure_is_embedding_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
        .create_async()
        .await;

    let provider = provider(Some(server.url()), "text-embedding-3-small");
    let err = provider.embed("jobs").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream(UpstreamStage::Embedding));
    assert!(err.to_string().contains("authentication failed"));
}

#[tokio::test]
async fn test_openai_embed_malformed_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let provider = provider(Some(server.url()), "text-embedding-3-small");
    let err = provider.embed("jobs").await.unwrap_err();

    assert_eq!(err.upstream_stage(), Some(UpstreamStage::Embedding));
    assert!(err.to_string().contains("data[0].embedding"));
}

#[tokio::test]
async fn test_openai_embed_unreachable_service() {
    // Nothing listens on port 9 of localhost
    let provider = provider(Some("http://127.0.0.1:9".to_string()), "text-embedding-3-small");
    let err = provider.embed("jobs").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Upstream(UpstreamStage::Embedding));
}

#[tokio::test]
async fn test_openai_embed_slow_headers_time_out() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body_from_request(|_| {
            std::thread::sleep(Duration::from_millis(500));
            br#"{"data": [{"embedding": [0.1]}]}"#.to_vec()
        })
        .create_async()
        .await;

    let provider = provider_with_timeout(
        Some(server.url()),
        "text-embedding-3-small",
        Duration::from_millis(50),
    );
    let err = provider.embed("jobs").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream(UpstreamStage::Embedding));
    assert!(err.to_string().contains("request timed out"), "{err}");
}

#[tokio::test]
async fn test_openai_embed_slow_body_times_out() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_chunked_body(|w| {
            w.write_all(br#"{"data": ["#)?;
            w.flush()?;
            std::thread::sleep(Duration::from_millis(500));
            w.write_all(br#"{"embedding": [0.1]}]}"#)
        })
        .create_async()
        .await;

    let provider = provider_with_timeout(
        Some(server.url()),
        "text-embedding-3-small",
        Duration::from_millis(50),
    );
    let err = provider.embed("jobs").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream(UpstreamStage::Embedding));
    assert!(err.to_string().contains("request timed out"), "{err}");
}
