//! Active shelf and search state.
//!
//! [`ShelfState`] owns `activeShelfId` and the search query. Every mutation
//! goes through a method that checks it against the current [`Library`], so
//! once data is loaded the active id always names an existing shelf.

use crate::config::GRID_CHUNK_SIZE;
use crate::core::search::{SearchQuery, chunk_rows};
use crate::models::{Book, Library, Shelf};

/// What the shelf area should show.
#[derive(Clone, Debug, PartialEq)]
pub enum ShelfView {
    /// No library loaded (or it has no shelves)
    NoShelf,
    /// The active shelf has no books at all
    EmptyShelf,
    /// A query is set and nothing on the active shelf matches
    NoMatches,
    /// Matched books grouped into layout rows
    Rows {
        rows: Vec<Vec<Book>>,
        matched: usize,
        total: usize,
    },
}

/// Keyboard movement within the tab list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabStep {
    Previous,
    Next,
    First,
    Last,
}

impl TabStep {
    /// Map a `KeyboardEvent.key` value. Other keys are not tab navigation.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

/// Shelf selection and search query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShelfState {
    active: Option<String>,
    query: SearchQuery,
}

impl ShelfState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Re-anchor the selection after a library is (re)loaded.
    ///
    /// Preference order: `preferred` (e.g. from `?shelf=`), the current
    /// selection, then the first shelf. An empty library clears it.
    pub fn sync_with(&mut self, library: &Library, preferred: Option<&str>) {
        let next = preferred
            .filter(|id| library.contains_shelf(id))
            .or_else(|| {
                self.active
                    .as_deref()
                    .filter(|id| library.contains_shelf(id))
            })
            .or_else(|| library.first_shelf_id())
            .map(str::to_string);

        if let Some(wanted) = preferred
            && next.as_deref() != Some(wanted)
        {
            tracing::debug!(shelf = wanted, "requested shelf not in library");
        }
        self.active = next;
    }

    /// Select a tab. Unknown ids (including any id on an empty library)
    /// leave the state untouched and return `false`.
    pub fn select(&mut self, library: &Library, id: &str) -> bool {
        if !library.contains_shelf(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = SearchQuery::new(raw);
    }

    pub fn active_shelf<'a>(&self, library: &'a Library) -> Option<&'a Shelf> {
        self.active.as_deref().and_then(|id| library.shelf(id))
    }

    /// Shelf reached from the active tab by `step`, wrapping at both ends.
    pub fn step<'a>(&self, library: &'a Library, step: TabStep) -> Option<&'a str> {
        let shelves = library.shelves();
        let last = shelves.len().checked_sub(1)?;
        let current = self
            .active
            .as_deref()
            .and_then(|id| shelves.iter().position(|s| s.id == id));

        let index = match (step, current) {
            (TabStep::First, _) | (TabStep::Next, None) => 0,
            (TabStep::Last, _) | (TabStep::Previous, None) => last,
            (TabStep::Next, Some(i)) if i == last => 0,
            (TabStep::Next, Some(i)) => i + 1,
            (TabStep::Previous, Some(0)) => last,
            (TabStep::Previous, Some(i)) => i - 1,
        };
        Some(shelves[index].id.as_str())
    }

    pub fn is_active(&self, shelf_id: &str) -> bool {
        self.active.as_deref() == Some(shelf_id)
    }

    /// Resolve what the shelf area should render.
    pub fn view(&self, library: &Library) -> ShelfView {
        let Some(shelf) = self.active_shelf(library) else {
            return ShelfView::NoShelf;
        };
        if shelf.books.is_empty() {
            return ShelfView::EmptyShelf;
        }

        let matched: Vec<Book> = self
            .query
            .filter(&shelf.books)
            .into_iter()
            .cloned()
            .collect();

        if matched.is_empty() {
            return ShelfView::NoMatches;
        }

        ShelfView::Rows {
            matched: matched.len(),
            total: shelf.books.len(),
            rows: chunk_rows(&matched, GRID_CHUNK_SIZE),
        }
    }
}
