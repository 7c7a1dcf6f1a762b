//! A browser bookshelf: shelves of books shown as tabs, a live search over
//! the active shelf, and a modal with book details and an embedded PDF
//! reader.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::config::{BookshelfConfig, MOUNT_ID};

/// Install logging and settings, then mount the app into `#app`.
pub fn start() {
    console_error_panic_hook::set_once();

    let settings = match BookshelfConfig::embedded() {
        Ok(settings) => {
            utils::logging::init(settings.max_level());
            settings
        }
        Err(err) => {
            utils::logging::init(tracing::Level::INFO);
            tracing::warn!(%err, "falling back to default settings");
            BookshelfConfig::default()
        }
    };
    config::install(settings);

    let Some(root) = document().get_element_by_id(MOUNT_ID) else {
        tracing::error!(id = MOUNT_ID, "mount element not found");
        return;
    };
    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
