//! Data models for the bookshelf.
//!
//! - [`Library`], [`Shelf`], [`Book`] - catalogue records
//! - [`Panel`], [`LoadStatus`] - view-level enums

mod library;
mod ui;

pub use library::{Book, Library, Shelf};
pub use ui::{LoadStatus, Panel};
