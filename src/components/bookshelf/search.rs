//! Search box.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::dom_ids;

stylance::import_crate_style!(css, "src/components/bookshelf/search.module.css");

/// Filters the active shelf by title or author on every keystroke.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <label class=css::search>
            <span class=css::icon aria-hidden="true">
                <Icon icon=ic::SEARCH />
            </span>
            <input
                id=dom_ids::SEARCH_INPUT
                class=css::input
                type="search"
                placeholder="Search by title or author"
                aria-label="Search books"
                autocomplete="off"
                on:input=move |ev| ctx.set_query(&event_target_value(&ev))
            />
        </label>
    }
}
