//! Details panel: cover, year, tags and description.

use leptos::prelude::*;

use crate::config::dom_ids;
use crate::models::Book;
use crate::utils::{dom, style};

stylance::import_crate_style!(css, "src/components/modal/details.module.css");

#[component]
pub fn DetailsPanel(book: Memo<Option<Book>>, shown: Signal<bool>) -> impl IntoView {
    let base = dom::base_uri();
    let cover = move || {
        book.with(|b| {
            b.as_ref()
                .map(|b| style::cover_style(b, base.as_deref()))
                .unwrap_or_default()
        })
    };
    let meta = move || {
        book.with(|b| {
            b.as_ref()
                .and_then(|b| b.year)
                .map(|year| year.to_string())
                .unwrap_or_default()
        })
    };
    let description = move || {
        book.with(|b| {
            b.as_ref()
                .and_then(Book::blurb)
                .unwrap_or("No description available.")
                .to_string()
        })
    };
    let tags = move || book.with(|b| b.as_ref().map(|b| b.tags.clone()).unwrap_or_default());

    view! {
        <div
            id=dom_ids::PANEL_DETAILS
            class=css::panel
            role="tabpanel"
            aria-labelledby=dom_ids::TAB_DETAILS
            hidden=move || !shown.get()
        >
            <div id=dom_ids::MODAL_COVER class=css::cover style=cover></div>
            <div class=css::info>
                <p id=dom_ids::MODAL_META class=css::meta>{meta}</p>
                <ul class=css::tags>
                    {move || {
                        tags()
                            .into_iter()
                            .map(|tag| view! { <li class=css::tag>{tag}</li> })
                            .collect_view()
                    }}
                </ul>
                <p id=dom_ids::MODAL_DESC class=css::description>{description}</p>
            </div>
        </div>
    }
}
