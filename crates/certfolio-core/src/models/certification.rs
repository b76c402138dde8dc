//! Certification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

/// Row identifier of a certification, as stored in the `certifications` table.
///
/// Tables keyed by `uuid` send a string, tables keyed by an `int8` identity
/// column send a number. Both are held as canonical text: UUIDs in lowercase
/// hyphenated form, integers in decimal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCertificationId", into = "String")]
pub struct CertificationId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCertificationId {
    Text(String),
    Integer(i64),
}

impl CertificationId {
    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for CertificationId {
    fn from(value: Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}

impl From<i64> for CertificationId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<CertificationId> for String {
    fn from(value: CertificationId) -> Self {
        value.0
    }
}

impl TryFrom<RawCertificationId> for CertificationId {
    type Error = Error;

    fn try_from(value: RawCertificationId) -> Result<Self, Self::Error> {
        match value {
            RawCertificationId::Text(text) => text.parse(),
            RawCertificationId::Integer(number) => Ok(Self::from(number)),
        }
    }
}

impl fmt::Display for CertificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CertificationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidId(s.to_string()));
        }
        Ok(Uuid::parse_str(trimmed).map_or_else(|_| Self(trimmed.to_string()), Self::from))
    }
}

/// A certificate shown on the certifications page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Unique identifier, used as the list key
    pub id: CertificationId,
    /// Display title
    pub certificate_name: String,
    /// Thumbnail image
    pub image_url: String,
    /// Certificate document: an http(s) URL or a `data:application/pdf;base64,` payload
    #[serde(default)]
    pub pdf_url: Option<String>,
    /// Visibility flag
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Display position, ascending
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

const fn default_active() -> bool {
    true
}

impl Certification {
    /// The document reference, if the record carries a non-blank one
    #[must_use]
    pub fn document_reference(&self) -> Option<&str> {
        self.pdf_url
            .as_deref()
            .filter(|reference| !reference.trim().is_empty())
    }

    /// Whether document-opening affordances should be offered for this record
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.document_reference().is_some()
    }
}
