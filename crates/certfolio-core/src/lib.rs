//! certfolio-core - Core library for Certfolio
//!
//! This crate contains the certification model, document reference handling,
//! the remote certification store, and the loading/rendering policy shared by
//! the web page and the CLI.

pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod models;
pub mod opener;
pub mod store;
pub mod util;
pub mod view;

pub use error::{Error, Result};
pub use models::{Certification, CertificationId};
