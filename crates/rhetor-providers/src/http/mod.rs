//! HTTP Client Abstractions
//!
//! - `HttpClientConfig` - Configuration for the shared HTTP client
//! - `HttpResponseUtils` - Utilities for handling HTTP responses (re-exported from utils)

pub mod client;

pub use crate::utils::HttpResponseUtils;
pub use client::HttpClientConfig;
