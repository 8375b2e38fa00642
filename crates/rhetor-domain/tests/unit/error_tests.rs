//! Unit tests for domain error types

use rhetor_domain::{Error, ErrorKind, UpstreamStage};

#[test]
fn test_validation_error() {
    let error = Error::validation("Topic is required");
    match &error {
        Error::Validation { message } => assert_eq!(message, "Topic is required"),
        _ => panic!("Expected Validation error"),
    }
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(!error.is_upstream());
}

#[test]
fn test_upstream_errors_carry_stage() {
    let cases = [
        (Error::embedding("timeout"), UpstreamStage::Embedding),
        (Error::vector_index("unreachable"), UpstreamStage::VectorIndex),
        (Error::generation("quota exceeded"), UpstreamStage::Generation),
    ];

    for (error, stage) in cases {
        assert_eq!(error.kind(), ErrorKind::Upstream(stage));
        assert_eq!(error.upstream_stage(), Some(stage));
        assert!(error.is_upstream());
    }
}

#[test]
fn test_upstream_constructor_matches_stage_specific_helpers() {
    let error = Error::upstream(UpstreamStage::VectorIndex, "index missing");
    assert!(matches!(error, Error::VectorIndex { .. }));
    assert!(error.to_string().contains("index missing"));
}

#[test]
fn test_empty_result_is_distinct_from_upstream() {
    let error = Error::empty_result("gpt-4");
    assert_eq!(error.kind(), ErrorKind::EmptyResult);
    assert!(error.is_empty_result());
    assert!(!error.is_upstream());
    assert!(error.to_string().contains("gpt-4"));
}

#[test]
fn test_configuration_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let error = Error::configuration_with_source("Failed to read config", io);
    assert_eq!(error.kind(), ErrorKind::Configuration);

    let source = std::error::Error::source(&error);
    assert!(source.is_some(), "source should be preserved");
}

#[test]
fn test_io_conversion_is_internal() {
    let io = std::io::Error::other("disk full");
    let error: Error = io.into();
    assert_eq!(error.kind(), ErrorKind::Internal);
}

#[test]
fn test_stage_display_names() {
    assert_eq!(UpstreamStage::Embedding.to_string(), "embedding");
    assert_eq!(UpstreamStage::VectorIndex.to_string(), "vector_index");
    assert_eq!(UpstreamStage::Generation.to_string(), "generation");
}
