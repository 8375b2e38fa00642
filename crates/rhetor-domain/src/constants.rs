//! Domain layer constants
//!
//! Values that shape the pipeline contract itself. Provider and
//! infrastructure defaults live in their own crates.

// ============================================================================
// RETRIEVAL CONSTANTS
// ============================================================================

/// Number of retrieved examples embedded into every generation prompt
pub const GENERATION_EXAMPLE_COUNT: usize = 3;

/// Default number of chunks returned by the search path
pub const SEARCH_DEFAULT_RESULTS: usize = 5;

/// Largest number of chunks a search may request
pub const SEARCH_MAX_RESULTS: usize = 5;

// ============================================================================
// GENERATION CONSTANTS
// ============================================================================

/// Output token budget for long statements
pub const MAX_OUTPUT_TOKENS_LONG: u32 = 1000;

/// Output token budget for short and medium statements
pub const MAX_OUTPUT_TOKENS_DEFAULT: u32 = 500;

/// Lowest accepted sampling temperature
pub const TEMPERATURE_MIN: f32 = 0.0;

/// Highest accepted sampling temperature
pub const TEMPERATURE_MAX: f32 = 1.0;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default generation model
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-4";

/// Cheaper alternative generation model
pub const ALTERNATE_GENERATION_MODEL: &str = "gpt-3.5-turbo";

/// Persona whose speaking style is emulated by default
pub const DEFAULT_PERSONA: &str = "Barack Obama";

// ============================================================================
// LENGTH INSTRUCTIONS
// ============================================================================

/// Length instruction for short statements
pub const LENGTH_INSTRUCTION_SHORT: &str = "1 substantial paragraph (4-6 sentences)";

/// Length instruction for medium statements
pub const LENGTH_INSTRUCTION_MEDIUM: &str = "2-3 paragraphs";

/// Length instruction for long statements
pub const LENGTH_INSTRUCTION_LONG: &str = "5-7 paragraphs with a clear beginning, middle, and end";

// ============================================================================
// INDEX METADATA KEYS
// ============================================================================

/// Metadata key holding the passage text
pub const METADATA_TEXT: &str = "text";

/// Metadata key holding the speech title
pub const METADATA_TITLE: &str = "title";

/// Metadata key holding the speech date
pub const METADATA_DATE: &str = "date";

/// Metadata key holding the source URL
pub const METADATA_URL: &str = "url";
