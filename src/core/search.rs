//! Search query normalization and book matching.

use crate::models::Book;

/// Normalized search text: trimmed and lowercased.
///
/// An empty query means "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match on title or author.
    pub fn matches(&self, book: &Book) -> bool {
        self.is_empty()
            || book.title.to_lowercase().contains(&self.0)
            || book.author.to_lowercase().contains(&self.0)
    }

    /// Books that match, in shelf order.
    pub fn filter<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Split items into layout rows of at most `size` entries.
pub fn chunk_rows<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size.max(1)).map(<[T]>::to_vec).collect()
}
