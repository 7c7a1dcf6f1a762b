//! Bookshelf container component.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::components::bookshelf::{LoadBanner, RefreshButton, SearchBox, ShelfArea, TabBar, boot};
use crate::components::modal::BookModal;
use crate::config::APP_NAME;
use crate::core::ModalState;
use crate::utils::CachePolicy;

stylance::import_crate_style!(css, "src/components/bookshelf/bookshelf.module.css");

/// Top-level bookshelf view.
///
/// Kicks off the initial load on mount and closes the modal on Escape.
#[component]
pub fn Bookshelf() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Initial load runs exactly once per mount
    let booted = StoredValue::new(false);
    Effect::new(move |_| {
        if booted.get_value() {
            return;
        }
        booted.set_value(true);
        boot::run(ctx, CachePolicy::Default);
    });

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && ctx.modal.with_untracked(ModalState::is_open) {
            e.prevent_default();
            ctx.close_modal();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <section class=css::bookshelf>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <div class=css::controls>
                    <SearchBox />
                    <RefreshButton />
                </div>
            </header>
            <LoadBanner />
            <TabBar />
            <ShelfArea />
            <BookModal />
        </section>
    }
}
