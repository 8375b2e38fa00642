//! Generation defaults

use rhetor_domain::constants::{
    DEFAULT_GENERATION_MODEL, DEFAULT_PERSONA, DEFAULT_TEMPERATURE, SEARCH_DEFAULT_RESULTS,
};
use rhetor_domain::value_objects::LengthCategory;
use serde::{Deserialize, Serialize};

/// Defaults applied when a caller does not specify generation parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Speaker whose style is emulated
    pub persona: String,

    /// Generation model identifier
    pub model: String,

    /// Sampling temperature, within [0.0, 1.0]
    pub temperature: f32,

    /// Statement length
    pub length: LengthCategory,

    /// Number of passages returned by a plain search
    pub search_results: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            model: DEFAULT_GENERATION_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            length: LengthCategory::default(),
            search_results: SEARCH_DEFAULT_RESULTS,
        }
    }
}
