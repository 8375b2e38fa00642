//! Tests for the composition root, against mock HTTP services

use mockito::{Matcher, Server, ServerGuard};
use rhetor_application::ports::SpeechServiceInterface;
use rhetor_domain::value_objects::{GenerationRequest, LengthCategory};
use rhetor_domain::{ErrorKind, UpstreamStage};
use rhetor_infrastructure::config::AppConfig;
use rhetor_infrastructure::init_app;
use serde_json::json;

fn config_for(server: &ServerGuard) -> AppConfig {
    let mut config = AppConfig::default();
    config.providers.openai.api_key = Some("sk-test".to_string());
    config.providers.openai.base_url = Some(server.url());
    config.providers.pinecone.api_key = Some("pc-test".to_string());
    config.providers.pinecone.host = Some(server.url());
    config.http.timeout_secs = 5;
    config
}

async fn mock_stats(server: &mut ServerGuard, total: u64) -> mockito::Mock {
    server
        .mock("POST", "/describe_index_stats")
        .match_header("api-key", "pc-test")
        .with_status(200)
        .with_body(json!({"totalVectorCount": total, "dimension": 3}).to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn test_init_requires_credentials() {
    let config = AppConfig::default();
    let err = init_app(config).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn test_init_rejects_empty_index() {
    let mut server = Server::new_async().await;
    let _stats = mock_stats(&mut server, 0).await;

    let err = init_app(config_for(&server)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("obama-speeches"));
}

#[tokio::test]
async fn test_init_unreachable_index_is_upstream_error() {
    let mut server = Server::new_async().await;
    let _stats = server
        .mock("POST", "/describe_index_stats")
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let err = init_app(config_for(&server)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Upstream(UpstreamStage::VectorIndex));
}

#[tokio::test]
async fn test_generate_end_to_end() {
    let mut server = Server::new_async().await;
    let _stats = mock_stats(&mut server, 42).await;
    let embeddings = server
        .mock("POST", "/embeddings")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({"input": "healthcare reform"})))
        .with_status(200)
        .with_body(json!({"data": [{"embedding": [0.1, 0.2, 0.3]}]}).to_string())
        .create_async()
        .await;
    let query = server
        .mock("POST", "/query")
        .match_body(Matcher::PartialJson(json!({"topK": 3, "includeMetadata": true})))
        .with_status(200)
        .with_body(
            json!({"matches": [
                {"id": "hc#0", "score": 0.91, "metadata": {
                    "title": "Health Care Address", "date": "2009-09-09",
                    "text": "I am not the first President to take up this cause.",
                    "url": "https://example.org/hc"}},
                {"id": "aca#2", "score": 0.84, "metadata": {
                    "title": "ACA Signing", "date": "2010-03-23",
                    "text": "Health insurance reform becomes law."}}
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    let chat = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "gpt-4", "max_tokens": 500})),
            Matcher::Regex(r"\[Relevance: 0\.91\]".to_string()),
        ]))
        .with_status(200)
        .with_body(
            json!({"choices": [{"message": {"role": "assistant", "content": "My fellow Americans..."}}]})
                .to_string(),
        )
        .create_async()
        .await;

    let context = init_app(config_for(&server)).await.unwrap();
    let service = context.speech_service();
    assert_eq!(service.index_stats().total_vector_count, 42);

    let request = GenerationRequest::new("healthcare reform", LengthCategory::Short, 0.7, "gpt-4");
    let result = service.generate_statement(&request).await.unwrap();

    assert_eq!(result.text, "My fellow Americans...");
    assert_eq!(result.example_count, 2);
    embeddings.assert_async().await;
    query.assert_async().await;
    chat.assert_async().await;
}

#[tokio::test]
async fn test_empty_generation_is_empty_result() {
    let mut server = Server::new_async().await;
    let _stats = mock_stats(&mut server, 42).await;
    let _embeddings = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_body(json!({"data": [{"embedding": [0.1, 0.2, 0.3]}]}).to_string())
        .create_async()
        .await;
    let _query = server
        .mock("POST", "/query")
        .with_status(200)
        .with_body(r#"{"matches": []}"#)
        .create_async()
        .await;
    let _chat = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": [{"message": {"content": ""}}]}"#)
        .create_async()
        .await;

    let context = init_app(config_for(&server)).await.unwrap();
    let request = GenerationRequest::new("jobs", LengthCategory::Medium, 0.7, "gpt-4");
    let err = context
        .speech_service()
        .generate_statement(&request)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EmptyResult);
}
