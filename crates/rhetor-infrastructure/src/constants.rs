//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `rhetor_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "rhetor.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "rhetor";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RHETOR";

/// Separator for nested keys in prefixed environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional environment variables and the configuration keys they set
pub const CONVENTIONAL_ENV_KEYS: [(&str, &str); 4] = [
    ("OPENAI_API_KEY", "providers.openai.api_key"),
    ("PINECONE_API_KEY", "providers.pinecone.api_key"),
    ("PINECONE_INDEX_NAME", "providers.pinecone.index_name"),
    ("PINECONE_HOST", "providers.pinecone.host"),
];

/// Placeholder printed instead of secrets
pub const REDACTED: &str = "***";

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Default Pinecone index name
pub const DEFAULT_INDEX_NAME: &str = "obama-speeches";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "RHETOR_LOG";

/// File stem used for rolling log files when none is given
pub const DEFAULT_LOG_FILE_STEM: &str = "rhetor";
