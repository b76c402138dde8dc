//! Certificate document references.
//!
//! A certification's `pdf_url` is either a link to a hosted document or the
//! document itself, inlined as a `data:application/pdf;base64,` URI. The
//! string is resolved into a [`DocumentRef`] once, at the boundary, so callers
//! never re-inspect the prefix.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use url::Url;

use crate::error::{Error, Result};

/// Prefix marking an inline, base64-encoded PDF.
pub const INLINE_PDF_PREFIX: &str = "data:application/pdf;base64,";

/// MIME type given to blobs built from inline payloads.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Standard alphabet, optional padding, tolerant of non-zero trailing bits.
/// Matches what browsers accept in `atob`.
const FORGIVING_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// A decoded inline document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineDocument {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

/// A certificate document reference, resolved by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRef {
    /// Embedded PDF bytes.
    Inline(InlineDocument),
    /// A string that parses as an absolute URL. Holds the original text, not
    /// the normalized form.
    Remote(String),
    /// Anything a strict URL parser rejects (relative paths, bare hosts).
    /// Browsers may still navigate to it.
    Unparsed(String),
}

impl DocumentRef {
    /// Resolve a raw reference string.
    ///
    /// Only inline payloads can fail, when the base64 text is malformed.
    pub fn resolve(raw: &str) -> Result<Self> {
        if raw.starts_with(INLINE_PDF_PREFIX) {
            let bytes = decode_inline_payload(raw)?;
            return Ok(Self::Inline(InlineDocument {
                bytes,
                mime_type: PDF_MIME_TYPE,
            }));
        }

        match Url::parse(raw) {
            Ok(_) => Ok(Self::Remote(raw.to_string())),
            Err(error) => {
                tracing::debug!("Document reference is not an absolute URL ({error}): {raw}");
                Ok(Self::Unparsed(raw.to_string()))
            }
        }
    }

    /// The kind of this reference.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::Inline(_) => DocumentKind::InlinePdf,
            Self::Remote(_) => DocumentKind::Url,
            Self::Unparsed(_) => DocumentKind::Link,
        }
    }
}

/// Shape of a document reference, without decoding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    InlinePdf,
    Url,
    Link,
}

impl DocumentKind {
    /// Classify a raw reference by prefix and URL shape.
    #[must_use]
    pub fn of(raw: &str) -> Self {
        if raw.starts_with(INLINE_PDF_PREFIX) {
            Self::InlinePdf
        } else if Url::parse(raw).is_ok() {
            Self::Url
        } else {
            Self::Link
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InlinePdf => "inline pdf",
            Self::Url => "url",
            Self::Link => "link",
        }
    }
}

/// Decode the payload of a `data:application/pdf;base64,` URI.
///
/// The payload runs from the first comma to the next one, if any. ASCII
/// whitespace inside it is ignored.
pub fn decode_inline_payload(raw: &str) -> Result<Vec<u8>> {
    let payload = raw
        .split(',')
        .nth(1)
        .ok_or_else(|| Error::Decode("missing base64 payload".to_string()))?;

    let compact: Vec<u8> = payload
        .bytes()
        .filter(|byte| !byte.is_ascii_whitespace())
        .collect();

    FORGIVING_BASE64
        .decode(compact)
        .map_err(|error| Error::Decode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_inline_pdf() {
        let raw = format!("{INLINE_PDF_PREFIX}JVBERi0xLjQK");
        let resolved = DocumentRef::resolve(&raw).unwrap();
        assert_eq!(
            resolved,
            DocumentRef::Inline(InlineDocument {
                bytes: b"%PDF-1.4\n".to_vec(),
                mime_type: PDF_MIME_TYPE,
            })
        );
    }

    #[test]
    fn inline_length_matches_decoded_payload() {
        let raw = format!("{INLINE_PDF_PREFIX}JVBERi0xLjcgdGVzdA==");
        let DocumentRef::Inline(document) = DocumentRef::resolve(&raw).unwrap() else {
            panic!("expected inline document");
        };
        assert_eq!(document.bytes.len(), "%PDF-1.7 test".len());
    }

    #[test]
    fn inline_decoding_ignores_whitespace_and_missing_padding() {
        let padded =
            decode_inline_payload(&format!("{INLINE_PDF_PREFIX}JVBERi0xLjcgdGVzdA==")).unwrap();
        let unpadded =
            decode_inline_payload(&format!("{INLINE_PDF_PREFIX}JVBERi0x\nLjcg dGVzdA")).unwrap();
        assert_eq!(padded, unpadded);
    }

    #[test]
    fn inline_payload_stops_at_next_comma() {
        let bytes =
            decode_inline_payload(&format!("{INLINE_PDF_PREFIX}JVBERi0xLjQK,trailing")).unwrap();
        assert_eq!(bytes, b"%PDF-1.4\n".to_vec());
    }

    #[test]
    fn malformed_inline_payload_is_a_decode_error() {
        let raw = format!("{INLINE_PDF_PREFIX}%%%not-base64%%%");
        assert!(matches!(DocumentRef::resolve(&raw), Err(Error::Decode(_))));
    }

    #[test]
    fn absolute_url_keeps_original_text() {
        let raw = "HTTPS://Cdn.Example.com/certs/aws.pdf";
        assert_eq!(
            DocumentRef::resolve(raw).unwrap(),
            DocumentRef::Remote(raw.to_string())
        );
    }

    #[test]
    fn relative_reference_is_unparsed() {
        let raw = "/certificates/aws.pdf";
        assert_eq!(
            DocumentRef::resolve(raw).unwrap(),
            DocumentRef::Unparsed(raw.to_string())
        );
    }

    #[test]
    fn kind_classifies_without_decoding() {
        assert_eq!(
            DocumentKind::of(&format!("{INLINE_PDF_PREFIX}%%%")),
            DocumentKind::InlinePdf
        );
        assert_eq!(DocumentKind::of("https://example.com/a.pdf"), DocumentKind::Url);
        assert_eq!(DocumentKind::of("cdn.example.com/a.pdf"), DocumentKind::Link);
        assert_eq!(DocumentKind::Link.label(), "link");
    }
}
