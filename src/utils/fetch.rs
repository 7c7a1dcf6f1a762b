//! Network fetching.
//!
//! Plain Fetch API wrapper with no timeout or retry. A failed load stays
//! failed until the reader presses refresh.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

/// HTTP cache behaviour for a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Let the browser decide (initial load)
    #[default]
    Default,
    /// Bypass the HTTP cache (manual refresh)
    Reload,
}

impl CachePolicy {
    fn request_cache(self) -> RequestCache {
        match self {
            Self::Default => RequestCache::Default,
            Self::Reload => RequestCache::NoStore,
        }
    }
}

/// Fetch a URL as text using the Fetch API.
pub async fn fetch_text(url: &str, cache: CachePolicy) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_cache(cache.request_cache());

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| "request failed".to_string()))
        })?;

    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
