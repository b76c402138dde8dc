use certfolio_core::view::BANNER_IMAGE_URL;
use dioxus::prelude::*;

#[component]
pub fn Banner() -> Element {
    rsx! {
        section { class: "relative h-64 sm:h-80 md:h-96 overflow-hidden",
            div {
                class: "absolute inset-0 bg-cover bg-center bg-no-repeat",
                style: "background-image: url({BANNER_IMAGE_URL});",
                div { class: "absolute inset-0 bg-black/20" }
            }
        }
    }
}
