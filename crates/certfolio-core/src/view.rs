//! Render policy and fixed copy for the certifications page.

use crate::models::Certification;

/// Background image of the page banner.
pub const BANNER_IMAGE_URL: &str =
    "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg?auto=compress&cs=tinysrgb&w=1920";
/// Thumbnail shown when a card's own image fails to load.
pub const CARD_FALLBACK_IMAGE_URL: &str =
    "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg?auto=compress&cs=tinysrgb&w=600";

pub const LOADING_TEXT: &str = "Loading certifications...";
pub const EMPTY_TITLE: &str = "No Certifications Available";
pub const EMPTY_MESSAGE: &str =
    "Certifications will appear here once they are added through the admin panel.";
pub const VIEW_CERTIFICATE_LABEL: &str = "View Certificate";
pub const CERTIFICATE_IMAGE_LABEL: &str = "Certificate Image";

/// Which of the three mutually exclusive page states to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a> {
    /// Spinner with [`LOADING_TEXT`].
    Loading,
    /// [`EMPTY_TITLE`] and [`EMPTY_MESSAGE`].
    Empty,
    /// One card per record, in the given order.
    Grid(&'a [Certification]),
}

impl<'a> ViewState<'a> {
    pub const fn derive(loading: bool, records: &'a [Certification]) -> Self {
        if loading {
            Self::Loading
        } else if records.is_empty() {
            Self::Empty
        } else {
            Self::Grid(records)
        }
    }
}

/// Class list of a card; clickable cards get a pointer cursor.
pub fn card_class(cert: &Certification) -> String {
    let base = "bg-white rounded-2xl shadow-lg hover:shadow-2xl transition-all duration-300 overflow-hidden group";
    if cert.has_document() {
        format!("{base} cursor-pointer")
    } else {
        base.to_string()
    }
}
