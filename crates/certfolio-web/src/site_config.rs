//! Site configuration loaded from build-time generated JSON.

use certfolio_core::config::SiteConfig;
use certfolio_core::store::SupabaseCertificationStore;

/// Loads the generated site config JSON from `OUT_DIR`.
///
/// If parsing fails, this logs a warning and returns an empty config; the page
/// then renders its empty state.
pub fn load_site_config() -> SiteConfig {
    parse_site_config(include_str!(concat!(env!("OUT_DIR"), "/site-config.json")))
}

fn parse_site_config(raw: &str) -> SiteConfig {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse site config: {}", error);
        SiteConfig::default()
    })
}

/// Builds the certification store, or `None` when the build carries no usable
/// Supabase endpoint.
pub fn build_store(config: &SiteConfig) -> Option<SupabaseCertificationStore> {
    let endpoint = match config.endpoint() {
        Ok(endpoint) => endpoint,
        Err(error) => {
            tracing::error!("Certification store unavailable: {}", error);
            return None;
        }
    };

    match SupabaseCertificationStore::new(&endpoint) {
        Ok(store) => Some(store),
        Err(error) => {
            tracing::error!("Failed to construct certification store: {}", error);
            None
        }
    }
}
