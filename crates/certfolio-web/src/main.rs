//! Certfolio Web
//!
//! The certifications page of the portfolio, rendered in the browser.

mod app;
mod components;
mod services;
mod site_config;
mod state;
mod views;

fn main() {
    // Browser console logging
    if let Err(error) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {error}");
    }

    tracing::info!("Starting Certfolio...");

    dioxus::launch(app::App);
}
