//! Data models for Certfolio

mod certification;

pub use certification::{Certification, CertificationId};
