//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `rhetor-domain`, configuration defaults in `rhetor-infrastructure`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

/// Default OpenAI embedding model
pub const OPENAI_DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

// ============================================================================
// OPENAI API CONSTANTS
// ============================================================================

/// OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat message role used for the single prompt message
pub const OPENAI_ROLE_USER: &str = "user";

// ============================================================================
// PINECONE CONSTANTS
// ============================================================================

/// Pinecone control plane URL (index lookup)
pub const PINECONE_CONTROL_PLANE_URL: &str = "https://api.pinecone.io";

/// Pinecone REST API version header value
pub const PINECONE_API_VERSION: &str = "2024-07";

/// Pinecone API key header name
pub const PINECONE_API_KEY_HEADER: &str = "Api-Key";

/// Pinecone API version header name
pub const PINECONE_API_VERSION_HEADER: &str = "X-Pinecone-API-Version";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client maximum idle connections per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// HTTP client idle connection timeout in seconds
pub const HTTP_CLIENT_IDLE_TIMEOUT_SECS: u64 = 90;

/// HTTP TCP keep-alive interval in seconds
pub const HTTP_KEEPALIVE_SECS: u64 = 60;
