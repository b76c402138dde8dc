//! Loading the certification list for display.

use crate::models::Certification;
use crate::store::CertificationSource;

/// Holds the loading flag up for as long as it lives.
///
/// The flag is set on creation and cleared on drop, so it is cleared whether
/// the load succeeds, fails, panics, or its future is dropped mid-request.
pub struct LoadingGuard<F: FnMut(bool)> {
    set_loading: F,
}

impl<F: FnMut(bool)> LoadingGuard<F> {
    pub fn new(mut set_loading: F) -> Self {
        set_loading(true);
        Self { set_loading }
    }
}

impl<F: FnMut(bool)> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.set_loading)(false);
    }
}

/// Issue one read against `source` and hand the rows to `set_records`.
///
/// Rows are passed on in fetch order. On failure the error is logged and the
/// list is set empty; there is no retry and no timeout. `set_records` runs
/// before the loading flag is cleared.
pub async fn load_certifications<S, L, R>(source: &S, set_loading: L, mut set_records: R)
where
    S: CertificationSource,
    L: FnMut(bool),
    R: FnMut(Vec<Certification>),
{
    let _loading = LoadingGuard::new(set_loading);

    match source.fetch_active_certifications().await {
        Ok(rows) => {
            tracing::info!("Loaded {} certifications", rows.len());
            set_records(rows);
        }
        Err(error) => {
            tracing::error!("Error loading certifications: {}", error);
            set_records(Vec::new());
        }
    }
}
