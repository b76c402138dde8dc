//! Certification card component

use certfolio_core::view::{
    card_class, CARD_FALLBACK_IMAGE_URL, CERTIFICATE_IMAGE_LABEL, VIEW_CERTIFICATE_LABEL,
};
use certfolio_core::Certification;
use dioxus::prelude::*;

use super::{AwardIcon, ExternalLinkIcon, FileTextIcon};
use crate::state::AppState;

/// One certificate in the grid.
///
/// Records with a document get three ways to open it: the overlay icon, the
/// hover caption, and the button under the title. Records without one render
/// no click handlers at all.
#[component]
pub fn CertificationCard(certification: Certification) -> Element {
    let state = use_context::<AppState>();
    let opener = state.opener;
    let mut image_src = use_signal(|| certification.image_url.clone());

    let class = card_class(&certification);
    let name = certification.certificate_name.clone();
    let reference = certification.document_reference().map(str::to_string);

    // Each invocation point gets its own handler over the same reference.
    let open_handler = move || {
        let reference = reference.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            let outcome = opener.open(reference.as_deref());
            tracing::debug!("Certificate open: {:?}", outcome);
        }
    };

    rsx! {
        div { class: "{class}",
            div { class: "relative overflow-hidden",
                img {
                    src: "{image_src}",
                    alt: "{name}",
                    class: "w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500",
                    onerror: move |_| {
                        if image_src.peek().as_str() != CARD_FALLBACK_IMAGE_URL {
                            image_src.set(CARD_FALLBACK_IMAGE_URL.to_string());
                        }
                    },
                }
                if certification.has_document() {
                    div { class: "absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" }
                    div {
                        class: "absolute top-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300",
                        onclick: open_handler(),
                        div { class: "p-2 bg-white/90 backdrop-blur-sm rounded-full",
                            ExternalLinkIcon { class: "h-5 w-5 text-primary-600" }
                        }
                    }
                    div {
                        class: "absolute bottom-4 left-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300",
                        onclick: open_handler(),
                        div { class: "flex items-center text-white font-semibold",
                            FileTextIcon { class: "h-4 w-4 mr-2" }
                            span { "{VIEW_CERTIFICATE_LABEL}" }
                        }
                    }
                }
            }

            div { class: "p-6",
                h3 { class: "text-xl font-bold text-gray-900 mb-3 group-hover:text-primary-600 transition-colors duration-300",
                    "{name}"
                }
                div { class: "flex items-center justify-between",
                    if certification.has_document() {
                        button {
                            class: "flex items-center text-primary-600 font-semibold text-sm hover:text-primary-700 transition-colors duration-200",
                            onclick: open_handler(),
                            FileTextIcon { class: "h-4 w-4 mr-2" }
                            span { "{VIEW_CERTIFICATE_LABEL}" }
                        }
                    } else {
                        div { class: "flex items-center text-gray-500 text-sm",
                            AwardIcon { class: "h-4 w-4 mr-2" }
                            span { "{CERTIFICATE_IMAGE_LABEL}" }
                        }
                    }
                }
            }
        }
    }
}
