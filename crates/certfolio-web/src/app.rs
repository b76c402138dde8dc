//! Main application component

use certfolio_core::opener::DocumentOpener;
use dioxus::prelude::*;

use crate::services::WebBrowserContext;
use crate::site_config::{build_store, load_site_config};
use crate::state::AppState;
use crate::views::Certifications;

/// Root application component
#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = load_site_config();
        AppState {
            store: build_store(&config),
            opener: DocumentOpener::new(WebBrowserContext),
        }
    });

    rsx! {
        // Utility classes used by the page markup
        document::Script { src: "https://cdn.tailwindcss.com" }

        Certifications {}
    }
}
