//! Load failure banner and refresh control.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::bookshelf::boot;
use crate::components::icons as ic;
use crate::models::{Library, LoadStatus};
use crate::utils::CachePolicy;

stylance::import_crate_style!(css, "src/components/bookshelf/banner.module.css");

/// Inline notice shown above the tabs when a load failed but a fallback
/// shelf is still on screen.
#[component]
pub fn LoadBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let message = Memo::new(move |_| {
        if ctx.library.with(Library::is_empty) {
            return None;
        }
        ctx.status.with(|s| s.error().map(str::to_string))
    });

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=css::banner role="alert">
                <span class=css::icon aria-hidden="true">
                    <Icon icon=ic::WARNING />
                </span>
                <span class=css::message>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Re-runs the configured source, bypassing the HTTP cache.
///
/// Renders nothing for sources that cannot change (the inline catalogue).
#[component]
pub fn RefreshButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let loading = Signal::derive(move || ctx.status.with(LoadStatus::is_loading));

    boot::can_refresh().then(|| {
        view! {
            <button
                type="button"
                class=css::refresh
                disabled=move || loading.get()
                on:click=move |_| boot::run(ctx, CachePolicy::Reload)
            >
                <Icon icon=ic::REFRESH />
                <span>{move || if loading.get() { "Refreshing…" } else { "Refresh" }}</span>
            </button>
        }
    })
}
