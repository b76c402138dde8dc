//! Application services
//!
//! Browser-backed implementations of core capabilities.

mod browser;

pub use browser::WebBrowserContext;
