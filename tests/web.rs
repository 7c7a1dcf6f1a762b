//! Browser tests for rendered markup.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use bookshelf::app::AppContext;
use bookshelf::components::bookshelf::{BookCard, ShelfArea, TabBar};
use bookshelf::components::modal::BookModal;
use bookshelf::config::dom_ids;
use bookshelf::models::{Book, Library, Panel, Shelf};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::HtmlElement {
    let doc = document();
    let el = doc
        .create_element("div")
        .expect("create container")
        .unchecked_into::<web_sys::HtmlElement>();
    doc.body()
        .expect("document body")
        .append_child(&el)
        .expect("attach container");
    el
}

fn by_id(root: &web_sys::HtmlElement, id: &str) -> Option<web_sys::Element> {
    root.query_selector(&format!("#{id}")).expect("valid selector")
}

fn active_shelf(ctx: AppContext) -> Option<String> {
    ctx.shelf
        .with_untracked(|s| s.active_id().map(str::to_string))
}

/// Let pending effects run.
async fn settle() {
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
fn test_card_title_is_escaped() {
    let root = container();
    let book = Book::new("x", "<b>Bold</b> & Co").by("A & B");

    let _handle = mount_to(root.clone(), move || {
        provide_context(AppContext::new());
        view! { <BookCard book=book /> }
    });

    let html = root.inner_html();
    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; Co"));
    assert!(root.query_selector("b").expect("valid selector").is_none());
}

#[wasm_bindgen_test]
async fn test_frame_src_removed_after_close() {
    let root = container();
    let ctx = AppContext::new();
    ctx.library.set(Library::new(vec![Shelf::new(
        "s",
        "Shelf",
        vec![Book::new("b1", "Doc").with_pdf("https://example.com/doc.pdf")],
    )]));

    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <BookModal /> }
    });

    let frame = || by_id(&root, dom_ids::PDF_FRAME).expect("reader frame rendered");
    assert!(frame().get_attribute("src").is_none());

    ctx.open_book("b1");
    ctx.show_panel(Panel::Reader);
    settle().await;
    let src = frame().get_attribute("src").expect("src set in reader");
    assert!(src.starts_with("https://example.com/doc.pdf"));

    ctx.close_modal();
    settle().await;
    assert!(frame().get_attribute("src").is_none());
}

#[wasm_bindgen_test]
async fn test_reader_tab_disabled_without_pdf() {
    let root = container();
    let ctx = AppContext::new();
    ctx.library.set(Library::new(vec![Shelf::new(
        "s",
        "Shelf",
        vec![Book::new("plain", "No document")],
    )]));

    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <BookModal /> }
    });

    ctx.open_book("plain");
    ctx.show_panel(Panel::Reader);
    settle().await;

    let tab = by_id(&root, dom_ids::TAB_READER).expect("reader tab rendered");
    assert!(tab.has_attribute("disabled"));
    assert_eq!(ctx.modal.get_untracked().panel(), Some(Panel::Details));
    assert!(
        by_id(&root, dom_ids::PANEL_READER)
            .expect("reader panel rendered")
            .has_attribute("hidden")
    );
}

#[wasm_bindgen_test]
async fn test_modal_title_and_tags_are_escaped() {
    let root = container();
    let ctx = AppContext::new();
    let mut book = Book::new("x", "<i>Odd</i> & Ends");
    book.tags = vec!["<b>loud</b>".to_string()];
    ctx.library
        .set(Library::new(vec![Shelf::new("s", "Shelf", vec![book])]));

    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <BookModal /> }
    });

    ctx.open_book("x");
    settle().await;

    let title = by_id(&root, dom_ids::MODAL_TITLE).expect("title rendered");
    assert!(title.inner_html().contains("&lt;i&gt;Odd&lt;/i&gt; &amp; Ends"));
    assert!(root.inner_html().contains("&lt;b&gt;loud&lt;/b&gt;"));
    assert!(root.query_selector("i").expect("valid selector").is_none());
    assert!(root.query_selector("b").expect("valid selector").is_none());
}

#[wasm_bindgen_test]
async fn test_no_matches_placeholder_rendered() {
    let root = container();
    let ctx = AppContext::new();
    let library = Library::new(vec![Shelf::new(
        "s",
        "Shelf",
        vec![Book::new("a", "Dune").by("Frank Herbert")],
    )]);
    ctx.shelf.update(|s| s.sync_with(&library, None));
    ctx.library.set(library);

    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <ShelfArea /> }
    });

    ctx.set_query("zzz");
    settle().await;

    let shelves = by_id(&root, dom_ids::SHELVES).expect("shelf area rendered");
    assert!(
        shelves
            .text_content()
            .unwrap_or_default()
            .contains("No books match your search.")
    );
    assert!(root.query_selector("[data-id]").expect("valid selector").is_none());
}

#[wasm_bindgen_test]
async fn test_arrow_keys_move_between_tabs() {
    let root = container();
    let ctx = AppContext::new();
    let library = Library::new(vec![
        Shelf::new("one", "One", vec![]),
        Shelf::new("two", "Two", vec![]),
        Shelf::new("three", "Three", vec![]),
    ]);
    ctx.shelf.update(|s| s.sync_with(&library, None));
    ctx.library.set(library);

    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <TabBar /> }
    });

    let press = |key: &str| {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        root.query_selector("[aria-selected=true]")
            .expect("valid selector")
            .expect("active tab rendered")
            .dispatch_event(&event)
            .expect("dispatch keydown");
    };

    press("ArrowRight");
    settle().await;
    assert_eq!(active_shelf(ctx).as_deref(), Some("two"));
    let focused = document().active_element().expect("a tab has focus");
    assert_eq!(focused.get_attribute("data-tab").as_deref(), Some("two"));

    press("End");
    settle().await;
    assert_eq!(active_shelf(ctx).as_deref(), Some("three"));

    press("ArrowRight");
    settle().await;
    assert_eq!(active_shelf(ctx).as_deref(), Some("one"));
}
