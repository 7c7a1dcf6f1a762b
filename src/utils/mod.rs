//! Utility modules for web, DOM, and styling operations.
//!
//! Provides:
//! - [`fetch_text`] - Network fetching with cache control
//! - [`sanitize_document_url`] - URL scheme validation for frames and links
//! - [`style`] - Cover style builders
//! - [`logging`] - `tracing` layer for the browser console

pub mod dom;
mod fetch;
pub mod logging;
pub mod style;
mod url;

pub use fetch::{CachePolicy, fetch_text};
pub use url::{
    UrlValidation, UrlValidationError, is_placeholder, sanitize_document_url,
    validate_document_url, with_fit_to_width,
};
