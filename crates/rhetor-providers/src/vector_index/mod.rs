//! Vector Index Provider Implementations
//!
//! Similarity search over an externally hosted index of speech passages.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | PineconeVectorIndexProvider | API | Pinecone serverless/pod indexes |

#[cfg(feature = "vectorindex-pinecone")]
pub mod pinecone;

#[cfg(feature = "vectorindex-pinecone")]
pub use pinecone::PineconeVectorIndexProvider;
