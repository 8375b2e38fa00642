//! Unit tests for generation value objects

use rhetor_domain::ErrorKind;
use rhetor_domain::constants::{
    LENGTH_INSTRUCTION_LONG, LENGTH_INSTRUCTION_MEDIUM, LENGTH_INSTRUCTION_SHORT,
};
use rhetor_domain::value_objects::{GenerationRequest, LengthCategory};

#[test]
fn test_length_parse_known_values() {
    assert_eq!(LengthCategory::parse("short"), LengthCategory::Short);
    assert_eq!(LengthCategory::parse("medium"), LengthCategory::Medium);
    assert_eq!(LengthCategory::parse(" Long "), LengthCategory::Long);
}

#[test]
fn test_length_parse_falls_back_to_medium() {
    for value in ["", "epic", "shorter", "5"] {
        assert_eq!(
            LengthCategory::parse(value),
            LengthCategory::Medium,
            "{value:?} should fall back to medium"
        );
    }
    assert_eq!(LengthCategory::try_parse("epic"), None);
}

#[test]
fn test_length_instructions() {
    assert_eq!(LengthCategory::Short.instruction(), LENGTH_INSTRUCTION_SHORT);
    assert_eq!(LengthCategory::Medium.instruction(), LENGTH_INSTRUCTION_MEDIUM);
    assert_eq!(LengthCategory::Long.instruction(), LENGTH_INSTRUCTION_LONG);
}

#[test]
fn test_max_output_tokens_by_length() {
    assert_eq!(LengthCategory::Short.max_output_tokens(), 500);
    assert_eq!(LengthCategory::Medium.max_output_tokens(), 500);
    assert_eq!(LengthCategory::Long.max_output_tokens(), 1000);
}

#[test]
fn test_length_deserializes_leniently() {
    let long: LengthCategory = serde_json::from_str("\"long\"").unwrap();
    assert_eq!(long, LengthCategory::Long);

    let unknown: LengthCategory = serde_json::from_str("\"novella\"").unwrap();
    assert_eq!(unknown, LengthCategory::Medium);

    assert_eq!(serde_json::to_string(&LengthCategory::Short).unwrap(), "\"short\"");
}

#[test]
fn test_request_validation_accepts_bounds() {
    for temperature in [0.0, 0.7, 1.0] {
        let request =
            GenerationRequest::new("climate", LengthCategory::Short, temperature, "gpt-4");
        assert!(request.validate().is_ok(), "{temperature} should be valid");
    }
}

#[test]
fn test_request_validation_rejects_bad_input() {
    let cases = [
        GenerationRequest::new("", LengthCategory::Medium, 0.7, "gpt-4"),
        GenerationRequest::new("   ", LengthCategory::Medium, 0.7, "gpt-4"),
        GenerationRequest::new("jobs", LengthCategory::Medium, 1.5, "gpt-4"),
        GenerationRequest::new("jobs", LengthCategory::Medium, -0.1, "gpt-4"),
        GenerationRequest::new("jobs", LengthCategory::Medium, f32::NAN, "gpt-4"),
        GenerationRequest::new("jobs", LengthCategory::Medium, 0.7, " "),
    ];

    for request in cases {
        let err = request.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{request:?}");
    }
}
