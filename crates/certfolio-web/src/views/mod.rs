//! Application views

mod certifications;

pub use certifications::Certifications;
