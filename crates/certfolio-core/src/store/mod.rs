//! Read access to the remote certification collection.

mod supabase;

pub use supabase::{
    active_certifications_url, parse_certifications, SupabaseCertificationStore,
    CERTIFICATIONS_TABLE,
};

use crate::error::{Error, Result};
use crate::models::Certification;

/// Source of the certifications shown on the page.
///
/// Implementations return only active records, ordered by `sort_order`
/// ascending. Callers never re-sort.
#[allow(async_fn_in_trait)]
pub trait CertificationSource {
    async fn fetch_active_certifications(&self) -> Result<Vec<Certification>>;
}

/// A missing source behaves like a failing one.
impl<S: CertificationSource> CertificationSource for Option<S> {
    async fn fetch_active_certifications(&self) -> Result<Vec<Certification>> {
        match self {
            Some(source) => source.fetch_active_certifications().await,
            None => Err(Error::Config(
                "certification store is not configured".to_string(),
            )),
        }
    }
}
