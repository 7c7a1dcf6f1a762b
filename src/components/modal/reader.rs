//! Reader panel: the book's PDF in an iframe.
//!
//! The frame's `src` is bound to [`AppContext::frame_source`], which is only
//! set while the reader panel of an open book is showing. Leaving the panel
//! or closing the modal removes the attribute and unloads the document.
//!
//! A notice with a direct link shows until the frame fires `load`. Browsers
//! that refuse to render PDFs inline never do, so after a stall (or straight
//! away on narrow viewports) the notice says so.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{self, FRAME_STALL_MS, NARROW_VIEWPORT_QUERY, dom_ids};

stylance::import_crate_style!(css, "src/components/modal/reader.module.css");

#[component]
pub fn ReaderPanel(shown: Signal<bool>, external: Memo<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notice_enabled = config::settings().fallback_notice;

    let frame_src = Memo::new(move |_| ctx.frame_source());
    let narrow = use_media_query(NARROW_VIEWPORT_QUERY.to_string());
    let stalled = RwSignal::new(false);

    // Restart the stall timer for every newly assigned document
    Effect::new(move |_| {
        stalled.set(false);
        let Some(src) = frame_src.get() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(FRAME_STALL_MS).await;
            let same_doc = frame_src
                .try_with_untracked(|current| current.as_deref() == Some(src.as_str()))
                .unwrap_or(false);
            if same_doc && !ctx.frame_loaded.get_untracked() {
                tracing::warn!(url = %src, "reader frame did not finish loading");
                stalled.set(true);
            }
        });
    });

    let show_notice = Signal::derive(move || {
        notice_enabled && frame_src.with(Option::is_some) && !ctx.frame_loaded.get()
    });
    let notice = move || {
        if stalled.get() || narrow.get() {
            "This browser may not display PDFs inline."
        } else {
            "Loading the PDF…"
        }
    };

    view! {
        <div
            id=dom_ids::PANEL_READER
            class=css::panel
            role="tabpanel"
            aria-labelledby=dom_ids::TAB_READER
            hidden=move || !shown.get()
        >
            <iframe
                id=dom_ids::PDF_FRAME
                class=css::frame
                title="PDF reader"
                src=move || frame_src.get()
                on:load=move |_| {
                    if frame_src.with_untracked(Option::is_some) {
                        ctx.frame_loaded.set(true);
                    }
                }
            ></iframe>
            <div id=dom_ids::PDF_FALLBACK class=css::fallback hidden=move || !show_notice.get()>
                <Icon icon=ic::WARNING />
                <span>{notice}</span>
                <a
                    id=dom_ids::PDF_DIRECT
                    class=css::direct
                    href=move || external.get()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Open the PDF directly"
                </a>
            </div>
        </div>
    }
}
