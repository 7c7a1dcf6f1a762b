//! Shelf area: rows of book cards for the active shelf.

use leptos::{ev, prelude::*};

use crate::app::AppContext;
use crate::config::dom_ids;
use crate::core::ShelfView;
use crate::models::{Book, LoadStatus};
use crate::utils::{dom, style};

stylance::import_crate_style!(css, "src/components/bookshelf/shelves.module.css");

/// Renders the active shelf filtered by the current query.
#[component]
pub fn ShelfArea() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let shelf_view = Memo::new(move |_| ctx.library.with(|lib| ctx.shelf.with(|s| s.view(lib))));
    let searching = Signal::derive(move || ctx.shelf.with(|s| !s.query().is_empty()));
    let loading = Signal::derive(move || ctx.status.with(LoadStatus::is_loading));

    view! {
        <div id=dom_ids::SHELVES class=css::shelves aria-live="polite">
            {move || match shelf_view.get() {
                ShelfView::NoShelf if loading.get() => {
                    view! { <p class=css::placeholder>"Loading books…"</p> }.into_any()
                }
                ShelfView::NoShelf => ().into_any(),
                ShelfView::EmptyShelf => {
                    view! { <p class=css::placeholder>"This shelf is empty."</p> }.into_any()
                }
                ShelfView::NoMatches => {
                    view! { <p class=css::placeholder>"No books match your search."</p> }
                        .into_any()
                }
                ShelfView::Rows { rows, matched, total } => {
                    view! {
                        {searching
                            .get()
                            .then(|| {
                                view! {
                                    <p class=css::summary>
                                        {format!("{} of {} books", matched, total)}
                                    </p>
                                }
                            })}
                        {rows
                            .into_iter()
                            .map(|row| view! { <ShelfRow books=row /> })
                            .collect_view()}
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// One shelf plank of up to `GRID_CHUNK_SIZE` books.
#[component]
fn ShelfRow(books: Vec<Book>) -> impl IntoView {
    view! {
        <section class=css::row>
            <div class=css::grid>
                {books.into_iter().map(|book| view! { <BookCard book=book /> }).collect_view()}
            </div>
        </section>
    }
}

/// Clickable cover tile. Enter and Space open it as well.
#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let cover = style::cover_style(&book, dom::base_uri().as_deref());
    let has_pdf = book.has_pdf();
    let label = if book.author.is_empty() {
        book.title.clone()
    } else {
        format!("{} by {}", book.title, book.author)
    };
    let hover = if book.tags.is_empty() {
        label.clone()
    } else {
        format!("{} ({})", label, book.tags.join(", "))
    };

    let Book { id, title, author, .. } = book;
    let data_id = id.clone();
    let cover_title = title.clone();
    let open = move || ctx.open_book(&id);
    let on_click = {
        let open = open.clone();
        move |_: ev::MouseEvent| open()
    };
    let on_keydown = move |e: ev::KeyboardEvent| {
        if matches!(e.key().as_str(), "Enter" | " ") {
            e.prevent_default();
            open();
        }
    };

    view! {
        <article
            class=css::book
            role="button"
            tabindex="0"
            data-id=data_id
            aria-label=label
            title=hover
            on:click=on_click
            on:keydown=on_keydown
        >
            <div class=css::cover style=cover>
                <span class=css::coverTitle>{cover_title}</span>
            </div>
            <div class=css::caption>
                <span class=css::bookTitle>{title}</span>
                <span class=css::bookAuthor>{author}</span>
            </div>
            {has_pdf.then(|| view! { <span class=css::pdfBadge>"PDF"</span> })}
        </article>
    }
}
