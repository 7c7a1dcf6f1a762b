//! Root application module.
//!
//! Contains the main App component and [`AppContext`], the single owner of
//! bookshelf state. Components read its signals and change state only
//! through its transition methods.

use leptos::prelude::*;

use crate::components::Bookshelf;
use crate::config::{self, SHELF_QUERY_PARAM};
use crate::core::{FrameOptions, LoadOutcome, ModalState, ShelfState, TabStep};
use crate::models::{Library, LoadStatus, Panel};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and reachable from any child
/// with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded catalogue (empty until the first load resolves).
    pub library: RwSignal<Library>,
    /// Active shelf and search query.
    pub shelf: RwSignal<ShelfState>,
    /// Book modal / reader state.
    pub modal: RwSignal<ModalState>,
    /// Progress of the current load.
    pub status: RwSignal<LoadStatus>,
    /// Set once the reader frame fires `load` for the current document.
    pub frame_loaded: RwSignal<bool>,
}

impl AppContext {
    /// Creates a context with an empty library and a closed modal.
    pub fn new() -> Self {
        Self {
            library: RwSignal::new(Library::empty()),
            shelf: RwSignal::new(ShelfState::new()),
            modal: RwSignal::new(ModalState::Closed),
            status: RwSignal::new(LoadStatus::Loading),
            frame_loaded: RwSignal::new(false),
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Mark a (re)load as in flight.
    pub fn begin_load(&self) {
        self.status.set(LoadStatus::Loading);
    }

    /// Replace the library wholesale and re-anchor dependent state.
    pub fn apply_outcome(&self, outcome: LoadOutcome) {
        let LoadOutcome { library, error } = outcome;
        let mirror = config::settings().mirror_url_state;
        let requested = if mirror {
            dom::query_param(SHELF_QUERY_PARAM)
        } else {
            None
        };

        self.shelf
            .update(|s| s.sync_with(&library, requested.as_deref()));
        self.modal.update(|m| m.reconcile(&library));

        tracing::info!(
            shelves = library.shelves().len(),
            books = library.book_count(),
            "library ready"
        );
        self.library.set(library);
        self.status.set(match error {
            Some(err) => LoadStatus::Failed(err.to_string()),
            None => LoadStatus::Ready,
        });

        if mirror {
            let active = self.shelf.with_untracked(|s| s.active_id().map(str::to_string));
            if let Some(active) = active
                && requested.as_deref() != Some(active.as_str())
            {
                dom::replace_query_param(SHELF_QUERY_PARAM, &active);
            }
        }
    }

    // ------------------------------------------------------------------
    // Shelf / search
    // ------------------------------------------------------------------

    /// Activate a tab. Unknown ids (or an empty library) are ignored.
    pub fn select_shelf(&self, id: &str) {
        let changed = self
            .library
            .with_untracked(|lib| self.shelf.try_update(|s| s.select(lib, id)))
            .unwrap_or(false);
        if !changed {
            return;
        }
        tracing::debug!(shelf = id, "shelf selected");
        if config::settings().mirror_url_state {
            dom::replace_query_param(SHELF_QUERY_PARAM, id);
        }
    }

    /// Move to a neighbouring tab. Returns the shelf now active.
    pub fn step_shelf(&self, step: TabStep) -> Option<String> {
        let target = self.library.with_untracked(|lib| {
            self.shelf
                .with_untracked(|s| s.step(lib, step).map(str::to_string))
        })?;
        self.select_shelf(&target);
        Some(target)
    }

    /// Update the search text (trimmed and lowercased by the state).
    pub fn set_query(&self, raw: &str) {
        self.shelf.update(|s| s.set_query(raw));
    }

    // ------------------------------------------------------------------
    // Modal / reader
    // ------------------------------------------------------------------

    /// Open the details panel for a book. Unknown ids are ignored.
    pub fn open_book(&self, id: &str) {
        let opened = self
            .library
            .with_untracked(|lib| self.modal.try_update(|m| m.open(lib, id)))
            .unwrap_or(false);
        if opened {
            self.frame_loaded.set(false);
            tracing::debug!(book = id, "modal opened");
        }
    }

    /// Switch the modal panel; the reader falls back to details for books
    /// without a document.
    ///
    /// `frame_loaded` is reset only on a real switch into the reader; the
    /// same document does not fire `load` again.
    pub fn show_panel(&self, panel: Panel) {
        let (before, shown) = self
            .library
            .with_untracked(|lib| {
                self.modal
                    .try_update(|m| (m.panel(), m.select_panel(lib, panel)))
            })
            .unwrap_or((None, None));
        if shown == Some(Panel::Reader) && before != Some(Panel::Reader) {
            self.frame_loaded.set(false);
        }
    }

    /// Close the modal, releasing the reader frame.
    pub fn close_modal(&self) {
        if self.modal.with_untracked(ModalState::is_open) {
            self.modal.set(ModalState::Closed);
            self.frame_loaded.set(false);
            tracing::debug!("modal closed");
        }
    }

    /// Reader frame source (absent unless the reader panel is showing).
    pub fn frame_source(&self) -> Option<String> {
        let settings = config::settings();
        let base = dom::base_uri();
        let opts = FrameOptions {
            base: base.as_deref(),
            fit_to_width: settings.fit_to_width,
        };
        self.library
            .with(|lib| self.modal.with(|m| m.frame_source(lib, opts)))
    }

    /// Sanitized document URL of the open book, for direct links.
    pub fn external_url(&self) -> Option<String> {
        let base = dom::base_uri();
        self.library
            .with(|lib| self.modal.with(|m| m.external_url(lib, base.as_deref())))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary so a render fault never blanks the page
/// - Renders the Bookshelf
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    max-width: 600px;
                    margin: 4rem auto;
                    padding: 2rem;
                    text-align: center;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #b91c1c; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #475569; margin-bottom: 2rem;">
                        "The bookshelf hit an unexpected error. Please try reloading the page."
                    </p>
                    <ul style="text-align: left; color: #b91c1c; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #1e293b;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 6px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Bookshelf />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, Shelf};

    fn context() -> AppContext {
        let ctx = AppContext::new();
        ctx.library.set(Library::new(vec![Shelf::new(
            "s",
            "Shelf",
            vec![
                Book::new("b", "With PDF").with_pdf("https://example.com/b.pdf"),
                Book::new("plain", "No PDF"),
            ],
        )]));
        ctx
    }

    #[test]
    fn test_reselecting_reader_keeps_frame_loaded() {
        let ctx = context();
        ctx.open_book("b");
        ctx.show_panel(Panel::Reader);
        assert!(!ctx.frame_loaded.get_untracked());

        ctx.frame_loaded.set(true);
        ctx.show_panel(Panel::Reader);
        assert!(ctx.frame_loaded.get_untracked());
        assert_eq!(ctx.modal.get_untracked().panel(), Some(Panel::Reader));
    }

    #[test]
    fn test_returning_to_reader_resets_frame_loaded() {
        let ctx = context();
        ctx.open_book("b");
        ctx.show_panel(Panel::Reader);
        ctx.frame_loaded.set(true);

        ctx.show_panel(Panel::Details);
        ctx.show_panel(Panel::Reader);
        assert!(!ctx.frame_loaded.get_untracked());
    }

    #[test]
    fn test_reader_without_pdf_stays_on_details() {
        let ctx = context();
        ctx.open_book("plain");
        ctx.show_panel(Panel::Reader);
        assert_eq!(ctx.modal.get_untracked().panel(), Some(Panel::Details));
    }
}
