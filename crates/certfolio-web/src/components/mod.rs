//! UI Components
//!
//! Building blocks of the certifications page.

mod banner;
mod certification_card;
mod icons;
mod status;

pub use banner::Banner;
pub use certification_card::CertificationCard;
pub use icons::{AwardIcon, ExternalLinkIcon, FileTextIcon};
pub use status::{EmptyState, LoadingSpinner};
