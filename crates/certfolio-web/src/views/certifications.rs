//! Certifications view - the whole page

use certfolio_core::loader::load_certifications;
use certfolio_core::view::ViewState;
use certfolio_core::Certification;
use dioxus::prelude::*;

use crate::components::{Banner, CertificationCard, EmptyState, LoadingSpinner};
use crate::state::AppState;

/// Banner plus the certification grid.
///
/// The list is fetched once per mount, in a spawned task, so rendering never
/// waits on the network.
#[component]
pub fn Certifications() -> Element {
    let state = use_context::<AppState>();
    let mut loading = use_signal(|| true);
    let mut certifications = use_signal(Vec::<Certification>::new);

    let store = state.store;
    use_future(move || {
        let store = store.clone();
        async move {
            load_certifications(
                &store,
                move |flag| loading.set(flag),
                move |rows| certifications.set(rows),
            )
            .await;
        }
    });

    let records = certifications.read();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-gray-50 to-white",
            Banner {}

            section { class: "py-16 bg-white",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    {
                        match ViewState::derive(loading(), &records) {
                            ViewState::Loading => rsx! {
                                LoadingSpinner {}
                            },
                            ViewState::Empty => rsx! {
                                EmptyState {}
                            },
                            ViewState::Grid(shown) => rsx! {
                                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                                    for cert in shown.iter() {
                                        CertificationCard {
                                            key: "{cert.id}",
                                            certification: cert.clone(),
                                        }
                                    }
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
