//! Loading and empty states of the certification grid

use certfolio_core::view::{EMPTY_MESSAGE, EMPTY_TITLE, LOADING_TEXT};
use dioxus::prelude::*;

use super::AwardIcon;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-primary-500" }
            span { class: "ml-2 text-gray-600", "{LOADING_TEXT}" }
        }
    }
}

/// Shown when loading finished with no records, including after a failed load.
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div { class: "text-center py-12",
            AwardIcon { class: "h-16 w-16 text-gray-400 mx-auto mb-4" }
            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "{EMPTY_TITLE}" }
            p { class: "text-gray-600", "{EMPTY_MESSAGE}" }
        }
    }
}
