//! Text helpers for configuration values and API error bodies.

/// Longest error-body excerpt carried in [`crate::Error::Api`].
pub const ERROR_BODY_EXCERPT_CHARS: usize = 180;

/// Trim a configuration value; blank or missing values become `None`.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Supabase project URLs must use an http(s) scheme.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Excerpt of a PostgREST error body, trimmed and capped at
/// [`ERROR_BODY_EXCERPT_CHARS`] characters.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(ERROR_BODY_EXCERPT_CHARS).collect()
}
