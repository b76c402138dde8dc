//! Site configuration.
//!
//! The page only needs the public Supabase project URL and anon key. Both are
//! safe to ship in a client build; secret credentials must never be stored
//! here.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Environment variables checked for the project URL, in order.
pub const SUPABASE_URL_VARS: [&str; 2] = ["SUPABASE_URL", "VITE_SUPABASE_URL"];
/// Environment variables checked for the anon key, in order.
pub const SUPABASE_ANON_KEY_VARS: [&str; 2] = ["SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY"];

/// Raw, possibly incomplete configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
}

/// Validated Supabase endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SupabaseEndpoint {
    /// Project URL without a trailing slash
    pub url: String,
    pub anon_key: String,
}

impl std::fmt::Debug for SupabaseEndpoint {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SupabaseEndpoint")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl SiteConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let first = |names: &[&str]| {
            names
                .iter()
                .find_map(|&name| normalize_text_option(lookup(name)))
        };
        Self {
            supabase_url: first(&SUPABASE_URL_VARS),
            supabase_anon_key: first(&SUPABASE_ANON_KEY_VARS),
        }
    }

    /// Fill unset fields from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            supabase_url: normalize_text_option(self.supabase_url)
                .or_else(|| normalize_text_option(fallback.supabase_url)),
            supabase_anon_key: normalize_text_option(self.supabase_anon_key)
                .or_else(|| normalize_text_option(fallback.supabase_anon_key)),
        }
    }

    /// Validate and normalize into a usable endpoint.
    pub fn endpoint(&self) -> Result<SupabaseEndpoint> {
        let url = normalize_text_option(self.supabase_url.clone())
            .ok_or_else(|| Error::Config("SUPABASE_URL is not set".to_string()))?;
        if !is_http_url(&url) {
            return Err(Error::Config(format!(
                "SUPABASE_URL must start with http:// or https:// (got {url})"
            )));
        }
        let anon_key = normalize_text_option(self.supabase_anon_key.clone())
            .ok_or_else(|| Error::Config("SUPABASE_ANON_KEY is not set".to_string()))?;

        Ok(SupabaseEndpoint {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }
}
