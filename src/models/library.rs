//! Library, shelf and book records.
//!
//! These mirror the JSON asset shape (`{ "shelves": [...] }`) and are also
//! produced by the CSV adapter and the inline catalogue.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

// =============================================================================
// Book
// =============================================================================

/// One catalogue entry.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Book {
    /// Lookup key, unique within its shelf
    pub id: String,
    /// Display title (required)
    pub title: String,
    /// Author line, may be empty
    #[serde(default)]
    pub author: String,
    /// Publication year
    #[serde(default, deserialize_with = "year_from_number_or_string")]
    pub year: Option<i32>,
    /// Longer blurb shown in the details panel
    #[serde(default)]
    pub description: Option<String>,
    /// CSS color used for the gradient cover when no image is set
    #[serde(default)]
    pub color: Option<String>,
    /// Cover image URL
    #[serde(default, alias = "cover")]
    pub img: Option<String>,
    /// Linked document URL
    #[serde(default)]
    pub pdf: Option<String>,
    /// Free-form labels
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Book {
    /// Create a book with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the author (builder style).
    pub fn by(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the document URL (builder style).
    pub fn with_pdf(mut self, pdf: impl Into<String>) -> Self {
        self.pdf = Some(pdf.into());
        self
    }

    /// Returns the document URL if one is set and non-blank.
    pub fn pdf_url(&self) -> Option<&str> {
        self.pdf.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Whether the reader panel may be reached for this book.
    pub fn has_pdf(&self) -> bool {
        self.pdf_url().is_some()
    }

    /// Returns the cover image URL if one is set and non-blank.
    pub fn cover_url(&self) -> Option<&str> {
        self.img.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Description text if present and non-blank.
    pub fn blurb(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Accept `2020`, `"2020"`, `""` and `null` for the year field.
fn year_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i64),
        Text(String),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Number(n)) => i32::try_from(n).ok(),
        Some(RawYear::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

// =============================================================================
// Shelf
// =============================================================================

/// A named, ordered group of books presented under one tab.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Shelf {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Shelf {
    pub fn new(id: impl Into<String>, name: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            books,
        }
    }

    /// Find a book on this shelf by id.
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }
}

// =============================================================================
// Library
// =============================================================================

/// Wire shape of the JSON asset.
#[derive(Deserialize)]
struct LibraryDocument {
    #[serde(default)]
    shelves: Vec<Shelf>,
}

impl From<LibraryDocument> for Library {
    fn from(doc: LibraryDocument) -> Self {
        Library::new(doc.shelves)
    }
}

/// Ordered sequence of shelves with unique ids.
///
/// Construction drops any shelf whose id was already seen, so lookups by id
/// are unambiguous.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "LibraryDocument")]
pub struct Library {
    shelves: Vec<Shelf>,
}

impl Library {
    /// Build a library, keeping the first shelf for each id.
    pub fn new(shelves: Vec<Shelf>) -> Self {
        let mut seen = HashSet::new();
        let shelves = shelves
            .into_iter()
            .filter(|shelf| {
                let fresh = seen.insert(shelf.id.clone());
                if !fresh {
                    tracing::warn!(shelf = %shelf.id, "dropping duplicate shelf id");
                }
                fresh
            })
            .collect();
        Self { shelves }
    }

    /// A library with no shelves (before load, or after a failed fetch).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode the JSON asset.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    pub fn shelf(&self, id: &str) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.id == id)
    }

    pub fn contains_shelf(&self, id: &str) -> bool {
        self.shelf(id).is_some()
    }

    pub fn first_shelf_id(&self) -> Option<&str> {
        self.shelves.first().map(|s| s.id.as_str())
    }

    /// Find a book by id across every shelf (first match wins).
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.shelves.iter().find_map(|s| s.book(id))
    }

    /// Total number of books across all shelves.
    pub fn book_count(&self) -> usize {
        self.shelves.iter().map(|s| s.books.len()).sum()
    }
}
