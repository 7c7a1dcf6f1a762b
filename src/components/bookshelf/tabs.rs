//! Shelf tab bar.

use leptos::{ev, html, prelude::*};
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::config::dom_ids;
use crate::core::TabStep;
use crate::models::Library;

stylance::import_crate_style!(css, "src/components/bookshelf/tabs.module.css");

/// Identity of one rendered tab. Keyed on every field so a refresh that
/// renames a shelf or changes its size re-renders the tab.
type TabKey = (String, String, usize);

/// One tab per shelf, in library order.
///
/// When the library is empty because loading failed, the failure message
/// takes the place of the tabs. Only the active tab is in the tab order;
/// the arrow keys, Home and End move between tabs.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let tabs = Memo::new(move |_| {
        ctx.library.with(|lib| {
            lib.shelves()
                .iter()
                .map(|s| (s.id.clone(), s.name.clone(), s.books.len()))
                .collect::<Vec<TabKey>>()
        })
    });

    let failure = Memo::new(move |_| {
        if !ctx.library.with(Library::is_empty) {
            return None;
        }
        ctx.status.with(|s| s.error().map(str::to_string))
    });

    let nav_ref = NodeRef::<html::Nav>::new();
    let on_keydown = move |e: ev::KeyboardEvent| {
        let Some(step) = TabStep::from_key(&e.key()) else {
            return;
        };
        e.prevent_default();
        if let Some(id) = ctx.step_shelf(step) {
            focus_tab(nav_ref, &id);
        }
    };

    view! {
        <nav
            id=dom_ids::TABS
            class=css::tabs
            role="tablist"
            aria-label="Shelves"
            node_ref=nav_ref
            on:keydown=on_keydown
        >
            {move || match failure.get() {
                Some(message) => view! {
                    <div class=css::failure role="alert">{message}</div>
                }
                .into_any(),
                None => view! {
                    <For
                        each=move || tabs.get()
                        key=|tab| tab.clone()
                        children=move |(id, name, count)| view! { <ShelfTab id=id name=name count=count /> }
                    />
                }
                .into_any(),
            }}
        </nav>
    }
}

#[component]
fn ShelfTab(id: String, name: String, count: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let active_id = id.clone();
    let is_active = Signal::derive(move || ctx.shelf.with(|s| s.is_active(&active_id)));
    let tab_id = id.clone();

    view! {
        <button
            type="button"
            role="tab"
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::tab, css::active)
                } else {
                    css::tab.to_string()
                }
            }
            aria-selected=move || if is_active.get() { "true" } else { "false" }
            tabindex=move || if is_active.get() { "0" } else { "-1" }
            data-tab=tab_id
            on:click=move |_| ctx.select_shelf(&id)
        >
            <span class=css::label>{name}</span>
            <span class=css::count aria-label=format!("{} books", count)>{count}</span>
        </button>
    }
}

fn focus_tab(nav: NodeRef<html::Nav>, id: &str) {
    let Some(nav) = nav.get_untracked() else {
        return;
    };
    let Ok(tabs) = nav.query_selector_all("[role=tab]") else {
        return;
    };
    let target = (0..tabs.length())
        .filter_map(|i| tabs.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .find(|tab| tab.get_attribute("data-tab").as_deref() == Some(id));
    if let Some(tab) = target {
        let _ = tab.focus();
    }
}
