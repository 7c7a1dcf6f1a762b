//! Book modal with a details panel and an embedded PDF reader.
//!
//! Exactly one panel is visible while the modal is open. The panel comes
//! from [`ModalState`](crate::core::ModalState), so the two can never both
//! show or both hide.

mod details;
mod reader;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::dom_ids;
use crate::core::ModalState;
use crate::models::{Book, Panel};

pub use details::DetailsPanel;
pub use reader::ReaderPanel;

stylance::import_crate_style!(css, "src/components/modal/modal.module.css");

/// Dialog for the selected book.
///
/// Closes on the close button, a backdrop click, or Escape (handled by the
/// bookshelf container).
#[component]
pub fn BookModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_open = Memo::new(move |_| ctx.modal.with(ModalState::is_open));
    let book = Memo::new(move |_| {
        ctx.library
            .with(|lib| ctx.modal.with(|m| m.active_book(lib).cloned()))
    });
    let panel = Memo::new(move |_| ctx.modal.with(ModalState::panel).unwrap_or_default());
    let reader_enabled = Memo::new(move |_| book.with(|b| b.as_ref().is_some_and(Book::has_pdf)));
    let external = Memo::new(move |_| ctx.external_url());

    let showing = move |p: Panel| Signal::derive(move || panel.get() == p);
    let details_shown = showing(Panel::Details);
    let reader_shown = showing(Panel::Reader);

    let title = move || book.with(|b| b.as_ref().map(|b| b.title.clone()).unwrap_or_default());
    let byline = move || book.with(|b| b.as_ref().map(|b| b.author.clone()).unwrap_or_default());

    view! {
        <div
            id=dom_ids::MODAL
            class=move || {
                if is_open.get() {
                    format!("{} {}", css::modal, css::open)
                } else {
                    css::modal.to_string()
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || if is_open.get() { "false" } else { "true" }
            aria-labelledby=dom_ids::MODAL_TITLE
            on:click=move |_| ctx.close_modal()
        >
            <div class=css::dialog on:click=|e: ev::MouseEvent| e.stop_propagation()>
                <header class=css::header>
                    <div class=css::heading>
                        <h2 id=dom_ids::MODAL_TITLE class=css::title>{title}</h2>
                        <p id=dom_ids::MODAL_BYLINE class=css::byline>{byline}</p>
                    </div>
                    <button
                        type="button"
                        class=css::close
                        aria-label="Close"
                        on:click=move |_| ctx.close_modal()
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <nav class=css::tabs role="tablist" aria-label="Book views">
                    <button
                        id=dom_ids::TAB_DETAILS
                        type="button"
                        role="tab"
                        class=move || tab_class(details_shown.get())
                        aria-selected=move || details_shown.get().to_string()
                        aria-controls=dom_ids::PANEL_DETAILS
                        on:click=move |_| ctx.show_panel(Panel::Details)
                    >
                        <Icon icon=ic::DETAILS />
                        <span>"Details"</span>
                    </button>
                    <button
                        id=dom_ids::TAB_READER
                        type="button"
                        role="tab"
                        class=move || tab_class(reader_shown.get())
                        aria-selected=move || reader_shown.get().to_string()
                        aria-controls=dom_ids::PANEL_READER
                        disabled=move || !reader_enabled.get()
                        title=move || (!reader_enabled.get()).then_some("No PDF for this book")
                        on:click=move |_| ctx.show_panel(Panel::Reader)
                    >
                        <Icon icon=ic::READER />
                        <span>"Read"</span>
                    </button>
                    <a
                        id=dom_ids::OPEN_NEW
                        class=css::external
                        href=move || external.get()
                        target="_blank"
                        rel="noopener noreferrer"
                        hidden=move || external.with(Option::is_none)
                    >
                        <Icon icon=ic::EXTERNAL_LINK />
                        <span>"Open in new tab"</span>
                    </a>
                </nav>

                <DetailsPanel book=book shown=details_shown />
                <ReaderPanel shown=reader_shown external=external />
            </div>
        </div>
    }
}

fn tab_class(selected: bool) -> String {
    if selected {
        format!("{} {}", css::tab, css::selected)
    } else {
        css::tab.to_string()
    }
}
