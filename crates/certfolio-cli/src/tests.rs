use certfolio_core::document::INLINE_PDF_PREFIX;
use certfolio_core::store::CertificationSource;
use certfolio_core::{Certification, Error};
use pretty_assertions::assert_eq;

use crate::cli::CompletionShell;
use crate::commands::common::{
    certification_to_list_item, document_file_name, fetch_certifications,
    format_certification_lines, normalize_certification_identifier, resolve_certification,
    truncate_name,
};
use crate::commands::completions::render_completions;
use crate::commands::document::{export_document, DocumentOutput};
use crate::error::CliError;

struct FakeSource(Option<Vec<Certification>>);

impl CertificationSource for FakeSource {
    async fn fetch_active_certifications(&self) -> certfolio_core::Result<Vec<Certification>> {
        self.0.clone().ok_or_else(|| Error::Api {
            status: 500,
            body: "boom".to_string(),
        })
    }
}

fn cert(id: &str, name: &str, pdf_url: Option<&str>) -> Certification {
    Certification {
        id: id.parse().unwrap(),
        certificate_name: name.to_string(),
        image_url: "https://img.example.com/cert.png".to_string(),
        pdf_url: pdf_url.map(str::to_string),
        is_active: true,
        sort_order: 0,
        created_at: None,
        updated_at: None,
    }
}

fn sample() -> Vec<Certification> {
    vec![
        cert(
            "0190f3c2-6a4e-7c1d-9a63-6f1f2b7f2a10",
            "AWS Solutions Architect",
            Some("https://cdn.example.com/aws.pdf"),
        ),
        cert(
            "0190f3c2-6a4e-7c1d-9a63-6f1f2b7f2a11",
            "Certified Kubernetes Administrator",
            Some(&format!("{INLINE_PDF_PREFIX}JVBERi0xLjQK")),
        ),
        cert("7d1f0000-0000-4000-8000-000000000001", "Scrum Master", None),
    ]
}

#[test]
fn normalize_certification_identifier_rejects_empty() {
    assert!(matches!(
        normalize_certification_identifier("   "),
        Err(CliError::EmptyCertificationId)
    ));
    assert_eq!(
        normalize_certification_identifier(" 7D1F ").unwrap(),
        "7d1f".to_string()
    );
}

#[test]
fn resolve_certification_by_full_id_and_unique_prefix() {
    let certs = sample();
    let exact = resolve_certification("0190f3c2-6a4e-7c1d-9a63-6f1f2b7f2a11", &certs).unwrap();
    assert_eq!(exact.certificate_name, "Certified Kubernetes Administrator");

    let by_prefix = resolve_certification("7d1f", &certs).unwrap();
    assert_eq!(by_prefix.certificate_name, "Scrum Master");
}

#[test]
fn resolve_certification_with_integer_ids_prefers_exact_match() {
    let certs = vec![
        cert("1", "AWS Solutions Architect", None),
        cert("12", "Scrum Master", None),
    ];
    let exact = resolve_certification("1", &certs).unwrap();
    assert_eq!(exact.certificate_name, "AWS Solutions Architect");

    let by_prefix = resolve_certification("12", &certs).unwrap();
    assert_eq!(by_prefix.certificate_name, "Scrum Master");
}

#[test]
fn resolve_certification_reports_ambiguity_and_absence() {
    let certs = sample();
    assert!(matches!(
        resolve_certification("0190f3c2", &certs),
        Err(CliError::AmbiguousCertificationId(_))
    ));
    assert!(matches!(
        resolve_certification("ffff", &certs),
        Err(CliError::CertificationNotFound(_))
    ));
}

#[test]
fn format_lines_keep_fetch_order_and_show_document_kind() {
    let lines = format_certification_lines(&sample());
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("AWS Solutions Architect"));
    assert!(lines[0].ends_with("url"));
    assert!(lines[1].ends_with("inline pdf"));
    assert!(lines[2].ends_with('-'));
}

#[test]
fn list_item_reports_missing_document() {
    let certs = sample();
    let item = certification_to_list_item(&certs[2]);
    assert_eq!(item.document, None);
    assert_eq!(item.id, "7d1f0000-0000-4000-8000-000000000001");
}

#[test]
fn truncate_name_adds_ellipsis() {
    assert_eq!(truncate_name("Short   name", 40), "Short name");
    assert_eq!(truncate_name("abcdefghij", 6), "abc...");
}

#[test]
fn document_file_name_slugifies() {
    assert_eq!(
        document_file_name("Certified Kubernetes Administrator (CKA)"),
        "certified-kubernetes-administrator-cka.pdf"
    );
    assert_eq!(document_file_name("***"), "certificate.pdf");
}

#[test]
fn export_inline_document_writes_decoded_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cka.pdf");
    let certs = sample();

    let output = export_document(&certs[1], Some(&path)).unwrap();

    assert_eq!(output, DocumentOutput::Written(path.clone()));
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4\n".to_vec());
}

#[test]
fn export_remote_document_returns_original_link() {
    let certs = sample();
    assert_eq!(
        export_document(&certs[0], None).unwrap(),
        DocumentOutput::Link("https://cdn.example.com/aws.pdf".to_string())
    );
}

#[test]
fn export_without_document_is_an_error() {
    let certs = sample();
    assert!(matches!(
        export_document(&certs[2], None),
        Err(CliError::NoDocument(name)) if name == "Scrum Master"
    ));
}

#[test]
fn export_malformed_inline_document_is_a_decode_error() {
    let broken = cert(
        "0190f3c2-6a4e-7c1d-9a63-6f1f2b7f2a12",
        "Broken",
        Some(&format!("{INLINE_PDF_PREFIX}@@@")),
    );
    assert!(matches!(
        export_document(&broken, None),
        Err(CliError::Core(Error::Decode(_)))
    ));
}

#[tokio::test]
async fn fetch_certifications_surfaces_errors() {
    assert_eq!(
        fetch_certifications(&FakeSource(Some(sample())))
            .await
            .unwrap()
            .len(),
        3
    );
    assert!(matches!(
        fetch_certifications(&FakeSource(None)).await,
        Err(CliError::Core(Error::Api { status: 500, .. }))
    ));
}

#[test]
fn completions_mention_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("certfolio"));
}
