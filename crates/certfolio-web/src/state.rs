//! Application state shared through the Dioxus context.

use certfolio_core::opener::DocumentOpener;
use certfolio_core::store::SupabaseCertificationStore;

use crate::services::WebBrowserContext;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the build has no Supabase configuration
    pub store: Option<SupabaseCertificationStore>,
    pub opener: DocumentOpener<WebBrowserContext>,
}
