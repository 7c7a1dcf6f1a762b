//! Book modal and reader state machine.
//!
//! ```text
//! Closed ──open──▶ Open(Details) ◀──▶ Open(Reader)
//!    ▲                  │                  │
//!    └──────close───────┴──────close───────┘
//! ```
//!
//! The embedded frame's source is derived from this state rather than stored
//! beside it: it exists only in `Open(Reader)`, so leaving the reader or
//! closing the modal releases the document.

use crate::models::{Book, Library, Panel};
use crate::utils::{sanitize_document_url, with_fit_to_width};

/// Which book is open and which panel is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { book_id: String, panel: Panel },
}

/// How the reader frame source is built.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameOptions<'a> {
    /// Base URI for resolving relative document URLs
    pub base: Option<&'a str>,
    /// Append the fit-to-width fragment
    pub fit_to_width: bool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn book_id(&self) -> Option<&str> {
        match self {
            Self::Open { book_id, .. } => Some(book_id),
            Self::Closed => None,
        }
    }

    pub fn panel(&self) -> Option<Panel> {
        match self {
            Self::Open { panel, .. } => Some(*panel),
            Self::Closed => None,
        }
    }

    /// Open the details panel for a book found anywhere in the library.
    ///
    /// A lookup miss leaves the state unchanged and returns `false`.
    pub fn open(&mut self, library: &Library, book_id: &str) -> bool {
        if library.find_book(book_id).is_none() {
            tracing::debug!(book = book_id, "open ignored: unknown book");
            return false;
        }
        *self = Self::Open {
            book_id: book_id.to_string(),
            panel: Panel::Details,
        };
        true
    }

    /// Switch panels. Asking for the reader on a book without a document
    /// resolves to details. Returns the panel now showing.
    pub fn select_panel(&mut self, library: &Library, requested: Panel) -> Option<Panel> {
        let reader_ok = self.reader_enabled(library);
        let Self::Open { panel, .. } = self else {
            return None;
        };
        *panel = match requested {
            Panel::Reader if reader_ok => Panel::Reader,
            _ => Panel::Details,
        };
        Some(*panel)
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Drop the open book if a reload removed it, and demote the reader if
    /// the book lost its document.
    pub fn reconcile(&mut self, library: &Library) {
        match self.active_book(library) {
            None if self.is_open() => self.close(),
            Some(book) if !book.has_pdf() => {
                self.select_panel(library, Panel::Details);
            }
            _ => {}
        }
    }

    pub fn active_book<'a>(&self, library: &'a Library) -> Option<&'a Book> {
        self.book_id().and_then(|id| library.find_book(id))
    }

    /// Whether the reader tab may be selected for the open book.
    pub fn reader_enabled(&self, library: &Library) -> bool {
        self.active_book(library).is_some_and(Book::has_pdf)
    }

    /// Source for the embedded frame, present only while the reader shows.
    pub fn frame_source(&self, library: &Library, opts: FrameOptions<'_>) -> Option<String> {
        if self.panel() != Some(Panel::Reader) {
            return None;
        }
        let raw = self.active_book(library)?.pdf_url()?;
        let url = sanitize_document_url(raw, opts.base);
        Some(if opts.fit_to_width {
            with_fit_to_width(&url)
        } else {
            url
        })
    }

    /// Sanitized document URL for "open externally" links.
    pub fn external_url(&self, library: &Library, base: Option<&str>) -> Option<String> {
        let raw = self.active_book(library)?.pdf_url()?;
        Some(sanitize_document_url(raw, base))
    }
}
