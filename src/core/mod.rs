//! Core bookshelf logic, independent of the view layer.
//!
//! This module provides:
//! - [`ShelfState`] active shelf + search query, and [`ShelfView`]
//! - [`ModalState`] book modal / reader state machine
//! - [`DataSource`] adapters producing a [`LoadOutcome`]
//! - [`csv`] spreadsheet import and [`search`] matching

pub mod csv;
pub mod error;
mod modal;
pub mod search;
mod shelf;
mod source;

pub use modal::{FrameOptions, ModalState};
pub use shelf::{ShelfState, ShelfView, TabStep};
pub use source::{DataSource, LoadOutcome, csv_outcome, json_outcome};
