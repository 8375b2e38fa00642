//! JSON Value Extension
//!
//! Provides convenient accessor methods for JSON values with default fallbacks.

/// Extension trait for serde_json::Value with convenient accessor methods
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use rhetor_providers::utils::JsonExt;
///
/// let stats = json!({"totalVectorCount": 42, "host": "index.example"});
/// assert_eq!(stats.u64_or("totalVectorCount", 0), 42);
/// assert_eq!(stats.opt_str("host"), Some("index.example"));
/// assert_eq!(stats.opt_u64("dimension"), None);
/// ```
pub trait JsonExt {
    /// Get u64 value or default
    fn u64_or(&self, key: &str, default: u64) -> u64;

    /// Get optional string (replaces .get().and_then(as_str))
    fn opt_str(&self, key: &str) -> Option<&str>;

    /// Get optional u64
    fn opt_u64(&self, key: &str) -> Option<u64>;
}

impl JsonExt for serde_json::Value {
    #[inline]
    fn u64_or(&self, key: &str, default: u64) -> u64 {
        self.opt_u64(key).unwrap_or(default)
    }

    #[inline]
    fn opt_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    #[inline]
    fn opt_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.as_u64())
    }
}
