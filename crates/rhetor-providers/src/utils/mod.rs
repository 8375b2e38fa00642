//! Provider Utilities
//!
//! Shared utilities used by provider implementations.

pub mod constructor;
mod http_response;
mod json;

pub use http_response::HttpResponseUtils;
pub use json::JsonExt;
