//! Data source adapters.
//!
//! Each variant produces the same [`LoadOutcome`]: a library that is always
//! renderable (possibly empty, possibly the setup shelf) plus the error that
//! forced a fallback, if any.

use crate::config::{inline_library, setup_shelf};
use crate::core::csv;
use crate::core::error::{FetchError, LoadError};
use crate::models::Library;
use crate::utils::{CachePolicy, fetch_text};

/// Where the library comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// JSON document shaped `{ "shelves": [...] }`
    StaticAsset { url: String },
    /// Compiled-in catalogue; never fails
    Inline,
    /// Published spreadsheet CSV export
    RemoteCsv { url: String },
}

/// Result of one load attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadOutcome {
    pub library: Library,
    pub error: Option<LoadError>,
}

impl LoadOutcome {
    fn ok(library: Library) -> Self {
        Self {
            library,
            error: None,
        }
    }
}

impl DataSource {
    /// Whether a manual refresh can change anything.
    pub fn is_refreshable(&self) -> bool {
        !matches!(self, Self::Inline)
    }

    /// Run the adapter. Never fails: errors are folded into the outcome.
    pub async fn load(&self, cache: CachePolicy) -> LoadOutcome {
        match self {
            Self::Inline => LoadOutcome::ok(inline_library()),
            Self::StaticAsset { url } => {
                tracing::info!(%url, "loading library asset");
                json_outcome(fetch_text(url, cache).await)
            }
            Self::RemoteCsv { url } => {
                tracing::info!(%url, "loading spreadsheet export");
                csv_outcome(fetch_text(url, cache).await)
            }
        }
    }
}

/// Fold a JSON fetch into an outcome. Failure leaves the library empty.
pub fn json_outcome(body: Result<String, FetchError>) -> LoadOutcome {
    let parsed = body
        .map_err(LoadError::from)
        .and_then(|text| Library::from_json(&text).map_err(LoadError::from));

    match parsed {
        Ok(library) => LoadOutcome::ok(library),
        Err(err) => {
            tracing::error!(%err, "library asset unavailable");
            LoadOutcome {
                library: Library::empty(),
                error: Some(err),
            }
        }
    }
}

/// Fold a CSV fetch into an outcome. Failure or zero usable rows falls back
/// to the setup shelf.
pub fn csv_outcome(body: Result<String, FetchError>) -> LoadOutcome {
    let parsed = body
        .map_err(LoadError::from)
        .and_then(|text| csv::parse_library(&text));

    match parsed {
        Ok(library) => LoadOutcome::ok(library),
        Err(err) => {
            tracing::warn!(%err, "spreadsheet unavailable, showing setup shelf");
            LoadOutcome {
                library: Library::new(vec![setup_shelf()]),
                error: Some(err),
            }
        }
    }
}
