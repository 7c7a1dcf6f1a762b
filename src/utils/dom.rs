//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every helper degrades
//! to a no-op (or `None`) outside a browser.

use wasm_bindgen::JsValue;
use web_sys::{Url, UrlSearchParams, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Base URI of the document, used to resolve relative book URLs.
pub fn base_uri() -> Option<String> {
    window()?.document()?.base_uri().ok()?
}

/// Read a query-string parameter from the current URL.
pub fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(name)
        .filter(|v| !v.is_empty())
}

/// Set a query-string parameter without navigating or adding a history
/// entry.
pub fn replace_query_param(name: &str, value: &str) {
    let Some(window) = window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = Url::new(&href) else {
        return;
    };
    url.search_params().set(name, value);

    if let Ok(history) = window.history()
        && history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
            .is_err()
    {
        tracing::debug!(param = name, "history.replaceState rejected");
    }
}
