use std::path::{Path, PathBuf};

use certfolio_core::document::DocumentRef;
use certfolio_core::store::CertificationSource;
use certfolio_core::Certification;

use crate::commands::common::{document_file_name, fetch_certifications, resolve_certification};
use crate::error::CliError;

/// Where a certification's document ended up.
#[derive(Debug, PartialEq, Eq)]
pub enum DocumentOutput {
    /// Inline PDF written to disk
    Written(PathBuf),
    /// Reference printed as-is
    Link(String),
}

pub async fn run_document<S: CertificationSource>(
    source: &S,
    id: &str,
    output_path: Option<&Path>,
) -> Result<(), CliError> {
    let certifications = fetch_certifications(source).await?;
    let certification = resolve_certification(id, &certifications)?;

    match export_document(certification, output_path)? {
        DocumentOutput::Written(path) => println!("{}", path.display()),
        DocumentOutput::Link(reference) => println!("{reference}"),
    }
    Ok(())
}

pub fn export_document(
    certification: &Certification,
    output_path: Option<&Path>,
) -> Result<DocumentOutput, CliError> {
    let reference = certification
        .document_reference()
        .ok_or_else(|| CliError::NoDocument(certification.certificate_name.clone()))?;

    match DocumentRef::resolve(reference)? {
        DocumentRef::Inline(document) => {
            let path = output_path.map_or_else(
                || PathBuf::from(document_file_name(&certification.certificate_name)),
                Path::to_path_buf,
            );
            std::fs::write(&path, &document.bytes)?;
            tracing::info!("Wrote {} bytes to {}", document.bytes.len(), path.display());
            Ok(DocumentOutput::Written(path))
        }
        DocumentRef::Remote(reference) | DocumentRef::Unparsed(reference) => {
            Ok(DocumentOutput::Link(reference))
        }
    }
}
