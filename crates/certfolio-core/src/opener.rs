//! Opening certificate documents in a new browsing context.
//!
//! The browser is reached through [`BrowserContext`] so the branching logic
//! can be exercised without a DOM.

use std::time::Duration;

use crate::document::{DocumentRef, InlineDocument};
use crate::error::Error;

/// Target used for every new context.
pub const NEW_TAB_TARGET: &str = "_blank";
/// `window.open` feature string: no opener handle, no referrer.
pub const NEW_TAB_FEATURES: &str = "noopener,noreferrer";
/// `rel` attribute for the synthetic anchor fallback.
pub const ANCHOR_REL: &str = "noopener noreferrer";
/// Alert shown when an inline document cannot be opened.
pub const OPEN_FAILED_MESSAGE: &str = "Unable to open PDF. Please try again.";
/// Default lifetime of a temporary object URL after its tab was opened.
pub const DEFAULT_REVOKE_DELAY: Duration = Duration::from_secs(1);

/// Attributes of the anchor element used when strict URL parsing fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorSpec<'a> {
    pub href: &'a str,
    pub target: &'a str,
    pub rel: &'a str,
}

/// Browser capabilities needed to open documents.
pub trait BrowserContext {
    /// Open `url` in a new, unreferenced context.
    ///
    /// Returns `false` only when the browser rejected the call. A `noopener`
    /// open never hands back a window, so success cannot be observed further.
    fn open_new_tab(&self, url: &str) -> bool;

    /// Wrap `bytes` in a blob of `mime_type` and return a temporary object URL.
    fn create_object_url(&self, bytes: &[u8], mime_type: &str) -> crate::Result<String>;

    /// Release an object URL now.
    fn revoke_object_url(&self, url: &str);

    /// Release an object URL once `delay` has elapsed.
    fn revoke_object_url_after(&self, url: String, delay: Duration);

    /// Insert an anchor, click it, and remove it again.
    fn click_anchor(&self, anchor: &AnchorSpec<'_>) -> crate::Result<()>;

    /// Blocking user-facing alert.
    fn alert(&self, message: &str);
}

/// When to release the object URL of an opened inline document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokePolicy {
    /// Give the new context this long to load the blob before revoking.
    AfterDelay(Duration),
    /// Keep the URL alive for the lifetime of the page.
    Never,
}

impl Default for RevokePolicy {
    fn default() -> Self {
        Self::AfterDelay(DEFAULT_REVOKE_DELAY)
    }
}

/// What a call to [`DocumentOpener::open`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// No document reference.
    Skipped,
    /// Inline document opened from an object URL.
    OpenedInline,
    /// The browser refused to open the inline document's tab.
    InlineBlocked,
    /// Absolute URL opened directly.
    OpenedRemote,
    /// The browser refused to open the absolute URL's tab.
    RemoteBlocked,
    /// Reference opened through the anchor fallback.
    OpenedViaAnchor,
    /// Decoding or blob construction failed; the user was alerted.
    Failed,
}

/// Opens certificate documents through a [`BrowserContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOpener<B> {
    browser: B,
    revoke_policy: RevokePolicy,
}

impl<B: BrowserContext> DocumentOpener<B> {
    pub fn new(browser: B) -> Self {
        Self {
            browser,
            revoke_policy: RevokePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_revoke_policy(mut self, revoke_policy: RevokePolicy) -> Self {
        self.revoke_policy = revoke_policy;
        self
    }

    pub const fn browser(&self) -> &B {
        &self.browser
    }

    /// Open a document reference. Absent or blank references are ignored.
    pub fn open(&self, reference: Option<&str>) -> OpenOutcome {
        let Some(raw) = reference.filter(|value| !value.trim().is_empty()) else {
            return OpenOutcome::Skipped;
        };

        match DocumentRef::resolve(raw) {
            Ok(DocumentRef::Inline(document)) => self.open_inline(&document),
            Ok(DocumentRef::Remote(url)) => {
                if self.browser.open_new_tab(&url) {
                    OpenOutcome::OpenedRemote
                } else {
                    tracing::warn!("Browser refused to open certificate URL: {}", url);
                    OpenOutcome::RemoteBlocked
                }
            }
            Ok(DocumentRef::Unparsed(href)) => self.open_via_anchor(&href),
            Err(error) => self.report_failure(&error),
        }
    }

    fn open_inline(&self, document: &InlineDocument) -> OpenOutcome {
        let object_url = match self
            .browser
            .create_object_url(&document.bytes, document.mime_type)
        {
            Ok(url) => url,
            Err(error) => return self.report_failure(&error),
        };

        if !self.browser.open_new_tab(&object_url) {
            tracing::warn!("Browser refused to open inline certificate document");
            self.browser.revoke_object_url(&object_url);
            return OpenOutcome::InlineBlocked;
        }

        tracing::debug!(
            "Opened inline certificate document ({} bytes)",
            document.bytes.len()
        );
        match self.revoke_policy {
            RevokePolicy::AfterDelay(delay) => {
                self.browser.revoke_object_url_after(object_url, delay);
            }
            RevokePolicy::Never => {}
        }
        OpenOutcome::OpenedInline
    }

    fn open_via_anchor(&self, href: &str) -> OpenOutcome {
        let anchor = AnchorSpec {
            href,
            target: NEW_TAB_TARGET,
            rel: ANCHOR_REL,
        };
        if let Err(error) = self.browser.click_anchor(&anchor) {
            tracing::warn!("Anchor fallback failed for {}: {}", href, error);
        }
        OpenOutcome::OpenedViaAnchor
    }

    fn report_failure(&self, error: &Error) -> OpenOutcome {
        tracing::error!("Error opening PDF: {}", error);
        self.browser.alert(OPEN_FAILED_MESSAGE);
        OpenOutcome::Failed
    }
}
