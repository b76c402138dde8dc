use certfolio_core::config::SiteConfig;
use certfolio_core::document::DocumentKind;
use certfolio_core::store::{CertificationSource, SupabaseCertificationStore};
use certfolio_core::Certification;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct CertificationListItem {
    pub id: String,
    pub certificate_name: String,
    pub image_url: String,
    pub sort_order: i32,
    pub document: Option<&'static str>,
    pub updated_at: Option<String>,
}

/// Explicit flags win over the environment.
pub fn site_config_from_cli(
    supabase_url: Option<String>,
    supabase_anon_key: Option<String>,
) -> SiteConfig {
    SiteConfig {
        supabase_url,
        supabase_anon_key,
    }
    .or(SiteConfig::from_env())
}

pub fn open_store(config: &SiteConfig) -> Result<SupabaseCertificationStore, CliError> {
    let endpoint = config.endpoint()?;
    Ok(SupabaseCertificationStore::new(&endpoint)?)
}

/// Unlike the page, the CLI surfaces load failures.
pub async fn fetch_certifications<S: CertificationSource>(
    source: &S,
) -> Result<Vec<Certification>, CliError> {
    Ok(source.fetch_active_certifications().await?)
}

pub fn normalize_certification_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyCertificationId)
    } else {
        Ok(trimmed.to_lowercase())
    }
}

/// Find a certification by full ID or unique ID prefix.
pub fn resolve_certification<'a>(
    query: &str,
    certifications: &'a [Certification],
) -> Result<&'a Certification, CliError> {
    let query = normalize_certification_identifier(query)?;

    if let Some(exact) = certifications
        .iter()
        .find(|cert| cert.id.as_str() == query)
    {
        return Ok(exact);
    }

    let matches = certifications
        .iter()
        .filter(|cert| cert.id.as_str().starts_with(&query))
        .collect::<Vec<_>>();

    match matches.as_slice() {
        [] => Err(CliError::CertificationNotFound(query)),
        [single] => Ok(*single),
        several => {
            let options = several
                .iter()
                .take(3)
                .map(|cert| short_id(cert))
                .collect::<Vec<_>>()
                .join(", ");
            Err(CliError::AmbiguousCertificationId(format!(
                "ID prefix '{query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn short_id(cert: &Certification) -> String {
    cert.id.as_str().chars().take(13).collect()
}

pub fn document_kind_label(cert: &Certification) -> Option<&'static str> {
    cert.document_reference()
        .map(|reference| DocumentKind::of(reference).label())
}

pub fn format_certification_lines(certifications: &[Certification]) -> Vec<String> {
    certifications
        .iter()
        .map(|cert| {
            let name = truncate_name(&cert.certificate_name, 40);
            let document = document_kind_label(cert).unwrap_or("-");
            format!("{:<13}  {name:<40}  {document}", short_id(cert))
        })
        .collect()
}

pub fn certification_to_list_item(cert: &Certification) -> CertificationListItem {
    CertificationListItem {
        id: cert.id.to_string(),
        certificate_name: cert.certificate_name.clone(),
        image_url: cert.image_url.clone(),
        sort_order: cert.sort_order,
        document: document_kind_label(cert),
        updated_at: cert.updated_at.map(|at| at.to_rfc3339()),
    }
}

pub fn truncate_name(name: &str, max_chars: usize) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

/// File name for an extracted inline PDF, derived from the certificate name.
pub fn document_file_name(certificate_name: &str) -> String {
    let mut slug = String::new();
    for ch in certificate_name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "certificate.pdf".to_string()
    } else {
        format!("{slug}.pdf")
    }
}
