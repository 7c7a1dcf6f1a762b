//! UI components built with Leptos.
//!
//! - [`bookshelf`] - Tabs, search and the book grid (main entry point)
//! - [`modal`] - Book details and PDF reader
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod bookshelf;
pub mod icons;
pub mod modal;

pub use bookshelf::Bookshelf;
