//! Document URL validation.
//!
//! Book `pdf` and `img` values come straight from data files and end up in
//! `src`/`href` attributes and CSS, so they are checked before use. Only
//! `http`, `https` and `file` URLs pass; everything else, including URLs
//! that fail to parse, is replaced with [`PLACEHOLDER_URL`].

use url::Url;

use crate::config::{ALLOWED_SCHEMES, FIT_TO_WIDTH_FRAGMENT, PLACEHOLDER_URL};

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is valid and safe to load (absolute form)
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL could not be parsed or resolved against the page
    Malformed,
    /// Scheme outside the allow list
    SchemeNotAllowed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::Malformed => write!(f, "URL is malformed"),
            Self::SchemeNotAllowed(scheme) => write!(f, "Scheme '{}' is not allowed", scheme),
        }
    }
}

/// Validate a document URL.
///
/// Relative URLs are resolved against `base` (normally the page's base URI).
/// Without a base they count as malformed.
pub fn validate_document_url(raw: &str, base: Option<&str>) -> UrlValidation {
    let raw = raw.trim();
    if raw.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            match base.and_then(|b| Url::parse(b).ok()).map(|b| b.join(raw)) {
                Some(Ok(url)) => url,
                _ => return UrlValidation::Invalid(UrlValidationError::Malformed),
            }
        }
        Err(_) => return UrlValidation::Invalid(UrlValidationError::Malformed),
    };

    let scheme = parsed.scheme();
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return UrlValidation::Invalid(UrlValidationError::SchemeNotAllowed(scheme.to_string()));
    }

    UrlValidation::Valid(parsed.into())
}

/// Validate and fall back to the inert placeholder on any failure.
pub fn sanitize_document_url(raw: &str, base: Option<&str>) -> String {
    match validate_document_url(raw, base) {
        UrlValidation::Valid(url) => url,
        UrlValidation::Invalid(err) => {
            tracing::warn!(url = raw, %err, "rejected document url");
            PLACEHOLDER_URL.to_string()
        }
    }
}

/// Whether a sanitized URL is the placeholder.
pub fn is_placeholder(url: &str) -> bool {
    url == PLACEHOLDER_URL
}

/// Ask the native PDF viewer for a fit-to-width initial view.
///
/// Leaves URLs that already carry a fragment (and the placeholder) alone.
pub fn with_fit_to_width(url: &str) -> String {
    if is_placeholder(url) || url.contains('#') {
        url.to_string()
    } else {
        format!("{}#{}", url, FIT_TO_WIDTH_FRAGMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://books.example.org/shelf/index.html";

    #[test]
    fn test_allowed_schemes() {
        assert_eq!(
            validate_document_url("http://x/doc.pdf", None),
            UrlValidation::Valid("http://x/doc.pdf".to_string())
        );
        assert!(matches!(
            validate_document_url("HTTPS://Example.org/a.pdf", None),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_document_url("file:///home/me/a.pdf", None),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_script_scheme_is_rejected() {
        assert_eq!(
            validate_document_url("javascript:alert(1)", Some(BASE)),
            UrlValidation::Invalid(UrlValidationError::SchemeNotAllowed(
                "javascript".to_string()
            ))
        );
        assert_eq!(
            sanitize_document_url("  JavaScript:alert(1)", Some(BASE)),
            PLACEHOLDER_URL
        );
        assert_eq!(
            sanitize_document_url("data:text/html,<script>x</script>", Some(BASE)),
            PLACEHOLDER_URL
        );
    }

    #[test]
    fn test_relative_urls_resolve_against_base() {
        assert_eq!(
            sanitize_document_url("docs/a.pdf", Some(BASE)),
            "https://books.example.org/shelf/docs/a.pdf"
        );
        assert_eq!(
            sanitize_document_url("/root.pdf", Some(BASE)),
            "https://books.example.org/root.pdf"
        );
    }

    #[test]
    fn test_malformed_always_becomes_placeholder() {
        assert_eq!(sanitize_document_url("docs/a.pdf", None), PLACEHOLDER_URL);
        assert_eq!(sanitize_document_url("http://[::1", Some(BASE)), PLACEHOLDER_URL);
        assert_eq!(sanitize_document_url("docs/a.pdf", Some("not a base")), PLACEHOLDER_URL);
        assert_eq!(
            validate_document_url("   ", Some(BASE)),
            UrlValidation::Invalid(UrlValidationError::Empty)
        );
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(
            with_fit_to_width("https://x/a.pdf"),
            "https://x/a.pdf#view=FitH"
        );
        assert_eq!(with_fit_to_width("https://x/a.pdf#page=3"), "https://x/a.pdf#page=3");
        assert_eq!(with_fit_to_width(PLACEHOLDER_URL), PLACEHOLDER_URL);
    }
}
