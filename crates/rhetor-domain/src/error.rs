//! Error handling types
//!
//! Every failure in the pipeline belongs to one of four kinds: configuration,
//! validation, upstream (tagged with the failing stage) and empty result.
//! Presentation layers branch on [`Error::kind`] and map kinds to their own
//! surface (exit codes, HTTP statuses); nothing here knows about either.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by upstream and configuration failures
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Pipeline stage that talks to an external service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamStage {
    /// Query embedding
    Embedding,
    /// Vector similarity search and index statistics
    VectorIndex,
    /// Language model generation
    Generation,
}

impl UpstreamStage {
    /// Stable lowercase name, used in log fields
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Embedding => "embedding",
            Self::VectorIndex => "vector_index",
            Self::Generation => "generation",
        }
    }
}

impl fmt::Display for UpstreamStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse error classification callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or invalid credentials, index name or settings
    Configuration,
    /// Caller-supplied input violates a precondition
    Validation,
    /// An external service call failed at the given stage
    Upstream(UpstreamStage),
    /// The generation service answered but produced no usable text
    EmptyResult,
    /// Local failure unrelated to caller input or upstream services
    Internal,
}

/// Main error type for Rhetor
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Caller input rejected before any external call
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the violated precondition
        message: String,
    },

    /// Embedding service error
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Vector index service error
    #[error("Vector index error: {message}")]
    VectorIndex {
        /// Description of the vector index failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Generation service error
    #[error("Generation provider error: {message}")]
    Generation {
        /// Description of the generation failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Generation succeeded but returned no text
    #[error("Generation produced no text (model: {model})")]
    EmptyResult {
        /// Model that was asked to generate
        model: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Embedding { .. } => ErrorKind::Upstream(UpstreamStage::Embedding),
            Self::VectorIndex { .. } => ErrorKind::Upstream(UpstreamStage::VectorIndex),
            Self::Generation { .. } => ErrorKind::Upstream(UpstreamStage::Generation),
            Self::EmptyResult { .. } => ErrorKind::EmptyResult,
            Self::Io { .. } | Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Stage that failed, if this is an upstream error
    pub fn upstream_stage(&self) -> Option<UpstreamStage> {
        match self.kind() {
            ErrorKind::Upstream(stage) => Some(stage),
            _ => None,
        }
    }

    /// Whether the error came from an external service call
    pub fn is_upstream(&self) -> bool {
        self.upstream_stage().is_some()
    }

    /// Whether the error is the soft "nothing generated" failure
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }
}

// Caller-facing error creation methods
impl Error {
    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an empty result error for the given model
    pub fn empty_result<S: Into<String>>(model: S) -> Self {
        Self::EmptyResult {
            model: model.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Upstream error creation methods
impl Error {
    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
            source: None,
        }
    }

    /// Create an embedding provider error with source
    pub fn embedding_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Embedding {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a vector index error
    pub fn vector_index<S: Into<String>>(message: S) -> Self {
        Self::VectorIndex {
            message: message.into(),
            source: None,
        }
    }

    /// Create a vector index error with source
    pub fn vector_index_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::VectorIndex {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a generation provider error
    pub fn generation<S: Into<String>>(message: S) -> Self {
        Self::Generation {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generation provider error with source
    pub fn generation_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Generation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an upstream error for an arbitrary stage
    pub fn upstream<S: Into<String>>(stage: UpstreamStage, message: S) -> Self {
        match stage {
            UpstreamStage::Embedding => Self::embedding(message),
            UpstreamStage::VectorIndex => Self::vector_index(message),
            UpstreamStage::Generation => Self::generation(message),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_with_source(err.to_string(), err)
    }
}
