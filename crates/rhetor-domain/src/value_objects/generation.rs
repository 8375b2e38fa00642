//! Generation Value Objects
//!
//! Requests and results of the statement generation use case.

use crate::constants::{
    LENGTH_INSTRUCTION_LONG, LENGTH_INSTRUCTION_MEDIUM, LENGTH_INSTRUCTION_SHORT,
    MAX_OUTPUT_TOKENS_DEFAULT, MAX_OUTPUT_TOKENS_LONG, TEMPERATURE_MAX, TEMPERATURE_MIN,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested statement length
///
/// Parsing never fails: unrecognized values fall back to [`LengthCategory::Medium`].
///
/// ```rust
/// use rhetor_domain::value_objects::LengthCategory;
///
/// assert_eq!(LengthCategory::parse("LONG"), LengthCategory::Long);
/// assert_eq!(LengthCategory::parse("epic"), LengthCategory::Medium);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LengthCategory {
    /// One substantial paragraph
    Short,
    /// Two to three paragraphs
    #[default]
    Medium,
    /// Five to seven paragraphs
    Long,
}

impl LengthCategory {
    /// All categories, shortest first
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Parse a length name, falling back to `Medium` for anything unknown
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }

    /// Strict lookup used where the caller wants to know about typos
    pub fn try_parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Prompt instruction describing the expected length
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Short => LENGTH_INSTRUCTION_SHORT,
            Self::Medium => LENGTH_INSTRUCTION_MEDIUM,
            Self::Long => LENGTH_INSTRUCTION_LONG,
        }
    }

    /// Output token budget for the generation call
    pub fn max_output_tokens(self) -> u32 {
        match self {
            Self::Long => MAX_OUTPUT_TOKENS_LONG,
            Self::Short | Self::Medium => MAX_OUTPUT_TOKENS_DEFAULT,
        }
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for LengthCategory {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for LengthCategory {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Value Object: Statement Generation Request
///
/// ## Business Rules
///
/// - Topic must contain non-whitespace text
/// - Temperature must lie in `[0.0, 1.0]`; out-of-range values are rejected, never clamped
/// - Model identifier must be non-empty
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    /// Subject of the statement, passed to the prompt verbatim
    pub topic: String,
    /// Requested length
    #[serde(default)]
    pub length: LengthCategory,
    /// Sampling temperature
    pub temperature: f32,
    /// Generation model identifier
    pub model: String,
}

impl GenerationRequest {
    /// Create a request; call [`GenerationRequest::validate`] before use
    pub fn new(
        topic: impl Into<String>,
        length: LengthCategory,
        temperature: f32,
        model: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            length,
            temperature,
            model: model.into(),
        }
    }

    /// Check every precondition without touching any external service
    pub fn validate(&self) -> Result<()> {
        validate_topic(&self.topic)?;
        validate_temperature(self.temperature)?;
        if self.model.trim().is_empty() {
            return Err(Error::validation("Model identifier is required"));
        }
        Ok(())
    }
}

/// Reject empty or whitespace-only topics
pub fn validate_topic(topic: &str) -> Result<()> {
    if topic.trim().is_empty() {
        return Err(Error::validation("Topic is required"));
    }
    Ok(())
}

/// Reject temperatures outside `[0.0, 1.0]`, including NaN
pub fn validate_temperature(temperature: f32) -> Result<()> {
    if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&temperature) {
        return Err(Error::validation(format!(
            "Temperature must be between {TEMPERATURE_MIN} and {TEMPERATURE_MAX}, got {temperature}"
        )));
    }
    Ok(())
}

/// Value Object: Generated Statement
///
/// The generated text together with the request parameters that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResult {
    /// Generated statement
    pub text: String,
    /// Topic of the request
    pub topic: String,
    /// Requested length
    pub length: LengthCategory,
    /// Temperature used
    pub temperature: f32,
    /// Model used
    pub model: String,
    /// Number of retrieved examples embedded into the prompt
    pub example_count: usize,
}
