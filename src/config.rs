//! Application configuration.
//!
//! Centralizes fixed constants and the runtime options embedded from
//! `assets/config/bookshelf.toml` at compile time.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::core::DataSource;
use crate::core::error::ConfigError;
use crate::models::{Book, Library, Shelf};

// =============================================================================
// Application Metadata
// =============================================================================

/// Heading shown above the tab bar.
pub const APP_NAME: &str = "Bookshelf";

/// Id of the element the app is mounted into.
pub const MOUNT_ID: &str = "app";

/// Embedded runtime options.
const EMBEDDED_CONFIG: &str = include_str!("../assets/config/bookshelf.toml");

// =============================================================================
// Data Configuration
// =============================================================================

/// Default location of the static JSON asset.
pub const DEFAULT_DATA_URL: &str = "assets/data/books.json";

/// Books per rendered shelf row.
pub const GRID_CHUNK_SIZE: usize = 12;

/// Cover colors assigned to CSV rows by `row index % len`.
pub const COVER_PALETTE: &[&str] = &[
    "#7c3aed", "#2563eb", "#0891b2", "#059669", "#ca8a04", "#ea580c", "#dc2626", "#db2777",
];

/// Fallback gradient color for books without one.
pub const DEFAULT_COVER_COLOR: &str = "#475569";

/// CSV import settings.
pub mod csv {
    /// Id of the single shelf built from a spreadsheet.
    pub const SHELF_ID: &str = "library";
    /// Tab label of that shelf.
    pub const SHELF_NAME: &str = "Library";
    /// Title the sheet template uses for empty rows.
    pub const UNTITLED: &str = "Untitled";
}

// =============================================================================
// URL Configuration
// =============================================================================

/// Query parameter mirroring the active shelf.
pub const SHELF_QUERY_PARAM: &str = "shelf";

/// Inert frame source substituted for rejected URLs.
pub const PLACEHOLDER_URL: &str = "about:blank";

/// Schemes a document URL may use.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "file"];

/// Fragment asking the native PDF viewer to fit the page width.
pub const FIT_TO_WIDTH_FRAGMENT: &str = "view=FitH";

// =============================================================================
// Reader Configuration
// =============================================================================

/// How long the frame may stay silent before the fallback notice warns
/// that the PDF may not display inline.
pub const FRAME_STALL_MS: u32 = 4000;

/// Viewports where embedded PDFs are unreliable and the direct link is
/// offered up front.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 768px)";

/// Fixed element ids the host page and stylesheet rely on.
pub mod dom_ids {
    pub const TABS: &str = "bs-tabs";
    pub const SHELVES: &str = "bs-shelves";
    pub const SEARCH_INPUT: &str = "bs-search-input";
    pub const MODAL: &str = "bs-modal";
    pub const MODAL_COVER: &str = "bs-modal-cover";
    pub const MODAL_TITLE: &str = "bs-modal-title";
    pub const MODAL_BYLINE: &str = "bs-modal-byline";
    pub const MODAL_META: &str = "bs-modal-meta";
    pub const MODAL_DESC: &str = "bs-modal-desc";
    pub const TAB_DETAILS: &str = "bs-tab-details";
    pub const TAB_READER: &str = "bs-tab-reader";
    pub const PANEL_DETAILS: &str = "bs-panel-details";
    pub const PANEL_READER: &str = "bs-panel-reader";
    pub const PDF_FRAME: &str = "bs-pdf-frame";
    pub const PDF_FALLBACK: &str = "bs-pdf-fallback";
    pub const PDF_DIRECT: &str = "bs-pdf-direct";
    pub const OPEN_NEW: &str = "bs-open-new";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Runtime Options
// =============================================================================

/// Which adapter produces the library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON document fetched once
    #[default]
    Static,
    /// Compiled-in catalogue
    Inline,
    /// Published spreadsheet export
    Csv,
}

/// `[source]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub url: Option<String>,
}

/// Options decoded from `bookshelf.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookshelfConfig {
    pub source: SourceConfig,
    /// Mirror the active shelf into `?shelf=`
    pub mirror_url_state: bool,
    /// Show the "having trouble loading" notice in the reader
    pub fallback_notice: bool,
    /// Append the fit-to-width fragment to frame sources
    pub fit_to_width: bool,
    /// Maximum tracing level forwarded to the console
    pub log_level: String,
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            mirror_url_state: true,
            fallback_notice: true,
            fit_to_width: true,
            log_level: "info".to_string(),
        }
    }
}

impl BookshelfConfig {
    /// Decode a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.data_source()?;
        Ok(config)
    }

    /// Decode the document compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    /// Resolve the configured adapter.
    pub fn data_source(&self) -> Result<DataSource, ConfigError> {
        let url = self.source.url.clone().filter(|u| !u.trim().is_empty());
        match self.source.kind {
            SourceKind::Static => Ok(DataSource::StaticAsset {
                url: url.unwrap_or_else(|| DEFAULT_DATA_URL.to_string()),
            }),
            SourceKind::Inline => Ok(DataSource::Inline),
            SourceKind::Csv => url
                .map(|url| DataSource::RemoteCsv { url })
                .ok_or(ConfigError::MissingUrl("csv")),
        }
    }

    /// Parsed log level (unknown names fall back to INFO).
    pub fn max_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

static SETTINGS: OnceLock<BookshelfConfig> = OnceLock::new();

/// Install the options chosen at start-up. Later calls are ignored.
pub fn install(config: BookshelfConfig) {
    let _ = SETTINGS.set(config);
}

/// Active runtime options.
pub fn settings() -> &'static BookshelfConfig {
    SETTINGS.get_or_init(|| BookshelfConfig::embedded().unwrap_or_default())
}

// =============================================================================
// Built-in Catalogues
// =============================================================================

/// Catalogue used by the inline source.
pub fn inline_library() -> Library {
    let mut meditations = Book::new("meditations", "Meditations")
        .by("Marcus Aurelius")
        .with_pdf("assets/pdfs/meditations.pdf");
    meditations.year = Some(180);
    meditations.color = Some("#7c3aed".to_string());
    meditations.tags = vec!["philosophy".to_string(), "stoicism".to_string()];
    meditations.description =
        Some("Private notes on duty, impermanence and self-command.".to_string());

    let mut walden = Book::new("walden", "Walden").by("Henry David Thoreau");
    walden.year = Some(1854);
    walden.color = Some("#059669".to_string());
    walden.tags = vec!["essays".to_string(), "nature".to_string()];

    let mut frankenstein = Book::new("frankenstein", "Frankenstein")
        .by("Mary Shelley")
        .with_pdf("assets/pdfs/frankenstein.pdf");
    frankenstein.year = Some(1818);
    frankenstein.color = Some("#dc2626".to_string());
    frankenstein.tags = vec!["gothic".to_string(), "classic".to_string()];

    let mut time_machine = Book::new("time-machine", "The Time Machine").by("H. G. Wells");
    time_machine.year = Some(1895);
    time_machine.color = Some("#2563eb".to_string());

    Library::new(vec![
        Shelf::new("nonfiction", "Non-fiction", vec![meditations, walden]),
        Shelf::new("fiction", "Fiction", vec![frankenstein, time_machine]),
    ])
}

/// Shelf shown when the spreadsheet cannot be read.
pub fn setup_shelf() -> Shelf {
    let steps = [
        (
            "setup-publish",
            "Publish your sheet",
            "File → Share → Publish to web, choose the sheet and CSV format, then copy the link.",
        ),
        (
            "setup-columns",
            "Use six columns",
            "id, title, author, year, description, pdf-url. The first row is treated as a header.",
        ),
        (
            "setup-config",
            "Point the bookshelf at it",
            "Set [source] kind = \"csv\" and url = \"<published link>\" in bookshelf.toml.",
        ),
    ];

    let books = steps
        .iter()
        .enumerate()
        .map(|(i, (id, title, description))| {
            let mut book = Book::new(*id, *title).by("Setup");
            book.description = Some(description.to_string());
            book.color = Some(COVER_PALETTE[i % COVER_PALETTE.len()].to_string());
            book
        })
        .collect();

    Shelf::new("setup", "Getting started", books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_decodes() {
        assert!(BookshelfConfig::embedded().is_ok());
    }

    #[test]
    fn test_defaults_when_keys_missing() {
        let config = BookshelfConfig::from_toml("").unwrap();
        assert_eq!(config, BookshelfConfig::default());
        assert_eq!(
            config.data_source().unwrap(),
            DataSource::StaticAsset {
                url: DEFAULT_DATA_URL.to_string()
            }
        );
    }

    #[test]
    fn test_csv_source_requires_url() {
        let err = BookshelfConfig::from_toml("[source]\nkind = \"csv\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingUrl("csv")));

        let config = BookshelfConfig::from_toml(
            "mirror_url_state = false\n[source]\nkind = \"csv\"\nurl = \"https://x/pub?output=csv\"\n",
        )
        .unwrap();
        assert!(!config.mirror_url_state);
        assert_eq!(
            config.data_source().unwrap(),
            DataSource::RemoteCsv {
                url: "https://x/pub?output=csv".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(BookshelfConfig::from_toml("[source]\nkind = \"ftp\"\n").is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = BookshelfConfig::default();
        assert_eq!(config.max_level(), tracing::Level::INFO);
        config.log_level = "debug".to_string();
        assert_eq!(config.max_level(), tracing::Level::DEBUG);
        config.log_level = "loud".to_string();
        assert_eq!(config.max_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_builtin_catalogues() {
        let lib = inline_library();
        assert_eq!(lib.first_shelf_id(), Some("nonfiction"));
        assert!(lib.find_book("frankenstein").unwrap().has_pdf());
        assert!(!lib.find_book("walden").unwrap().has_pdf());

        let setup = setup_shelf();
        assert_eq!(setup.books.len(), 3);
        assert!(setup.books.iter().all(|b| !b.has_pdf()));
    }
}
