//! Spreadsheet CSV import.
//!
//! Reads a published sheet export line by line. Columns are positional:
//! `id, title, author, year, description, pdf-url`. The header row is
//! skipped; quoted fields may contain commas and doubled quotes but not
//! newlines.

use crate::config::{COVER_PALETTE, csv as sheet};
use crate::core::error::LoadError;
use crate::models::{Book, Library, Shelf};

/// Column positions in the sheet.
mod col {
    pub const ID: usize = 0;
    pub const TITLE: usize = 1;
    pub const AUTHOR: usize = 2;
    pub const YEAR: usize = 3;
    pub const DESCRIPTION: usize = 4;
    pub const PDF: usize = 5;
}

/// Split one CSV record into trimmed fields.
///
/// `""` inside a quoted field is an escaped quote. Quotes that appear in the
/// middle of an unquoted field are kept literally.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

/// Map one data row to a book. `index` is the zero-based data row position
/// and picks the cover color.
pub fn book_from_record(fields: &[String], index: usize) -> Option<Book> {
    let get = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    let title = get(col::TITLE);
    if title.is_empty() || title == sheet::UNTITLED {
        return None;
    }

    let id = match get(col::ID) {
        "" => format!("row-{}", index + 1),
        id => id.to_string(),
    };

    Some(Book {
        id,
        title: title.to_string(),
        author: get(col::AUTHOR).to_string(),
        year: get(col::YEAR).parse().ok(),
        description: non_empty(get(col::DESCRIPTION)),
        color: Some(COVER_PALETTE[index % COVER_PALETTE.len()].to_string()),
        img: None,
        pdf: non_empty(get(col::PDF)),
        tags: Vec::new(),
    })
}

/// Build the single-shelf library for a sheet export.
///
/// Rows without a usable title are skipped, as are rows repeating an id
/// already seen. Fails with [`LoadError::EmptyCsv`] when nothing survives.
pub fn parse_library(text: &str) -> Result<Library, LoadError> {
    let mut books: Vec<Book> = Vec::new();

    for (index, line) in text
        .lines()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .enumerate()
    {
        let Some(book) = book_from_record(&split_record(line), index) else {
            continue;
        };
        if books.iter().any(|b| b.id == book.id) {
            tracing::debug!(id = %book.id, "skipping duplicate sheet row");
            continue;
        }
        books.push(book);
    }

    if books.is_empty() {
        return Err(LoadError::EmptyCsv);
    }

    tracing::debug!(rows = books.len(), "parsed spreadsheet");
    Ok(Library::new(vec![Shelf::new(
        sheet::SHELF_ID,
        sheet::SHELF_NAME,
        books,
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_record() {
        assert_eq!(
            split_record("a, b ,c"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert_eq!(split_record(""), vec![String::new()]);
        assert_eq!(split_record("a,,"), vec!["a", "", ""]);
    }

    #[test]
    fn test_split_quoted_commas_and_escaped_quotes() {
        let fields =
            split_record(r#""b1","My ""Book""","Author",2020,"Desc","http://x/doc.pdf""#);
        assert_eq!(
            fields,
            vec!["b1", "My \"Book\"", "Author", "2020", "Desc", "http://x/doc.pdf"]
        );

        assert_eq!(split_record(r#""Smith, Jane",x"#), vec!["Smith, Jane", "x"]);
    }

    #[test]
    fn test_split_keeps_inner_quote_in_unquoted_field() {
        assert_eq!(split_record(r#"5" floppy,y"#), vec![r#"5" floppy"#, "y"]);
    }

    #[test]
    fn test_split_strips_carriage_return() {
        assert_eq!(split_record("a,b\r"), vec!["a", "b"]);
    }

    #[test]
    fn test_escaped_quote_row_becomes_book() {
        let fields =
            split_record(r#""b1","My ""Book""","Author",2020,"Desc","http://x/doc.pdf""#);
        let book = book_from_record(&fields, 0).unwrap();
        assert_eq!(book.id, "b1");
        assert_eq!(book.title, "My \"Book\"");
        assert_eq!(book.author, "Author");
        assert_eq!(book.year, Some(2020));
        assert_eq!(book.description.as_deref(), Some("Desc"));
        assert_eq!(book.pdf.as_deref(), Some("http://x/doc.pdf"));
    }

    #[test]
    fn test_rows_without_title_are_dropped() {
        let row = |title: &str| vec!["id".to_string(), title.to_string()];
        assert!(book_from_record(&row(""), 0).is_none());
        assert!(book_from_record(&row("Untitled"), 0).is_none());
        assert!(book_from_record(&["only-id".to_string()], 0).is_none());
        assert!(book_from_record(&row("untitled draft"), 0).is_some());
    }

    #[test]
    fn test_palette_by_row_index() {
        let fields = vec!["x".to_string(), "T".to_string()];
        let first = book_from_record(&fields, 0).unwrap();
        let wrapped = book_from_record(&fields, COVER_PALETTE.len()).unwrap();
        assert_eq!(first.color.as_deref(), Some(COVER_PALETTE[0]));
        assert_eq!(wrapped.color, first.color);
        assert_eq!(
            book_from_record(&fields, 1).unwrap().color.as_deref(),
            Some(COVER_PALETTE[1])
        );
    }

    #[test]
    fn test_missing_id_and_bad_year() {
        let fields = split_record(",Loose Leaf,,circa 1900,,");
        let book = book_from_record(&fields, 4).unwrap();
        assert_eq!(book.id, "row-5");
        assert_eq!(book.year, None);
        assert!(book.description.is_none());
        assert!(!book.has_pdf());
    }

    #[test]
    fn test_parse_library_skips_header_and_bad_rows() {
        let text = "id,title,author,year,description,pdf\n\
                    b1,First,Ann,2001,,\n\
                    b2,Untitled,,,,\n\
                    \n\
                    b3,\"Third, Revised\",Cy,,\"A \"\"quoted\"\" blurb\",https://x/3.pdf\n\
                    b1,Duplicate,,,,\n";
        let lib = parse_library(text).unwrap();
        let shelf = lib.shelf("library").unwrap();
        let titles: Vec<_> = shelf.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Third, Revised"]);
        assert_eq!(
            shelf.books[1].description.as_deref(),
            Some("A \"quoted\" blurb")
        );
    }

    #[test]
    fn test_parse_library_header_only_is_empty() {
        assert_eq!(
            parse_library("id,title,author,year,description,pdf\n"),
            Err(LoadError::EmptyCsv)
        );
        assert_eq!(parse_library(""), Err(LoadError::EmptyCsv));
    }
}
