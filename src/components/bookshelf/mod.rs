//! Shelf browser: heading, search, tab bar, book grid and load banner.

mod banner;
pub mod boot;
mod bookshelf;
mod search;
mod shelves;
mod tabs;

pub use banner::{LoadBanner, RefreshButton};
pub use bookshelf::Bookshelf;
pub use search::SearchBox;
pub use shelves::{BookCard, ShelfArea};
pub use tabs::TabBar;
