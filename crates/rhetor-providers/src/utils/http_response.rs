//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! Every failure is tagged with the pipeline stage that made the call.

use std::time::Duration;

use reqwest::Response;
use rhetor_domain::error::{Error, Result, UpstreamStage};

/// Format a stage-tagged upstream error
fn upstream_error(stage: UpstreamStage, provider: &str, context: &str, details: &str) -> Error {
    Error::upstream(stage, format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `stage` - Pipeline stage the request belongs to
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or a stage-tagged upstream error
    pub async fn check_and_parse(
        response: Response,
        stage: UpstreamStage,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => {
                    upstream_error(stage, provider_name, "authentication failed", &error_text)
                }
                404 => upstream_error(stage, provider_name, "resource not found", &error_text),
                429 => upstream_error(stage, provider_name, "rate limit exceeded", &error_text),
                500..=599 => upstream_error(
                    stage,
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => upstream_error(
                    stage,
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                upstream_error(stage, provider_name, "request timed out", "response body incomplete")
            } else {
                upstream_error(stage, provider_name, "response parse failed", &e.to_string())
            }
        })
    }

    /// Map a transport-level failure (timeout, connection refused, DNS)
    pub fn request_error(
        stage: UpstreamStage,
        provider_name: &str,
        timeout: Duration,
        err: &reqwest::Error,
    ) -> Error {
        if err.is_timeout() {
            upstream_error(
                stage,
                provider_name,
                "request timed out",
                &format!("no response after {timeout:?}"),
            )
        } else {
            upstream_error(stage, provider_name, "HTTP request failed", &err.to_string())
        }
    }
}
