//! Error types for the bookshelf.
//!
//! - [`FetchError`] - network/fetch failures for HTTP requests
//! - [`LoadError`] - a data source could not produce a library
//! - [`ConfigError`] - the embedded configuration could not be decoded

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (offline, CORS, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
}

/// Reasons a data source produced no usable library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Failed to load data: {0}")]
    Fetch(#[from] FetchError),
    #[error("Failed to read library data: {0}")]
    Parse(String),
    #[error("The spreadsheet has no usable rows")]
    EmptyCsv,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Embedded configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bookshelf.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("source `{0}` requires a url")]
    MissingUrl(&'static str),
}
