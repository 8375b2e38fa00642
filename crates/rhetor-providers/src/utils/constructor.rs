//! Common constructor patterns used by API providers

/// Template for validating and normalizing API keys
pub fn validate_api_key(api_key: &str) -> String {
    api_key.trim().to_string()
}

/// Get effective URL with fallback to default, without a trailing slash
pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
    provided_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(default_url)
        .trim_end_matches('/')
        .to_string()
}

/// Prefix `https://` onto bare host names
pub fn ensure_scheme(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}
