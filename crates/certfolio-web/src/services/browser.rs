//! `web-sys` implementation of the document opener's browser capability.

use std::time::Duration;

use certfolio_core::opener::{AnchorSpec, BrowserContext, NEW_TAB_FEATURES, NEW_TAB_TARGET};
use certfolio_core::{Error, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

/// The current browser window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebBrowserContext;

impl BrowserContext for WebBrowserContext {
    fn open_new_tab(&self, url: &str) -> bool {
        let Ok(window) = current_window() else {
            return false;
        };
        match window.open_with_url_and_target_and_features(url, NEW_TAB_TARGET, NEW_TAB_FEATURES) {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!("window.open failed: {}", describe(&error));
                false
            }
        }
    }

    fn create_object_url(&self, bytes: &[u8], mime_type: &str) -> Result<String> {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(browser_error)?;
        Url::create_object_url_with_blob(&blob).map_err(browser_error)
    }

    fn revoke_object_url(&self, url: &str) {
        if let Err(error) = Url::revoke_object_url(url) {
            tracing::warn!("Failed to revoke object URL: {}", describe(&error));
        }
    }

    fn revoke_object_url_after(&self, url: String, delay: Duration) {
        let Ok(window) = current_window() else {
            return;
        };
        let timeout_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let callback = Closure::once_into_js(move || {
            if let Err(error) = Url::revoke_object_url(&url) {
                tracing::warn!("Failed to revoke object URL: {}", describe(&error));
            }
        });
        if let Err(error) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout_ms,
        ) {
            tracing::warn!("Failed to schedule object URL release: {}", describe(&error));
        }
    }

    fn click_anchor(&self, anchor: &AnchorSpec<'_>) -> Result<()> {
        let document = current_window()?
            .document()
            .ok_or_else(|| Error::Browser("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| Error::Browser("document has no body".to_string()))?;

        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(browser_error)?
            .dyn_into()
            .map_err(|_| Error::Browser("created element is not an anchor".to_string()))?;
        link.set_href(anchor.href);
        link.set_target(anchor.target);
        link.set_rel(anchor.rel);

        body.append_child(&link).map_err(browser_error)?;
        link.click();
        body.remove_child(&link).map_err(browser_error)?;
        Ok(())
    }

    fn alert(&self, message: &str) {
        if let Ok(window) = current_window() {
            if let Err(error) = window.alert_with_message(message) {
                tracing::warn!("window.alert failed: {}", describe(&error));
            }
        }
    }
}

fn current_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Browser("no window".to_string()))
}

fn browser_error(value: JsValue) -> Error {
    Error::Browser(describe(&value))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
