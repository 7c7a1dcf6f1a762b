//! Inline style builders for book covers.
//!
//! Cover colors and image URLs are data-sourced and land inside a `style`
//! attribute, so both are filtered before interpolation.

use crate::config::DEFAULT_COVER_COLOR;
use crate::models::Book;

use super::url::{is_placeholder, sanitize_document_url};

/// Accept hex, named and functional CSS colors; reject anything that could
/// close the declaration or pull in a URL.
pub fn css_color(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let allowed = |c: char| c.is_ascii_alphanumeric() || "#(),.% ".contains(c);
    let lower = raw.to_ascii_lowercase();

    (!raw.is_empty()
        && raw.chars().all(allowed)
        && !lower.contains("url")
        && !lower.contains("expression"))
    .then_some(raw)
}

/// Quote a URL for use inside CSS `url("...")`.
pub fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\22 "),
            '\\' => out.push_str("\\5c "),
            '\n' | '\r' | '\u{c}' => out.push(' '),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Gradient used when a book has no usable cover image.
pub fn cover_gradient(color: Option<&str>) -> String {
    let color = color.and_then(css_color).unwrap_or(DEFAULT_COVER_COLOR);
    format!("background: linear-gradient(160deg, {color} 0%, #0f172a 120%);")
}

/// Full `style` value for a book cover.
pub fn cover_style(book: &Book, base: Option<&str>) -> String {
    let gradient = cover_gradient(book.color.as_deref());
    let Some(raw) = book.cover_url() else {
        return gradient;
    };

    let url = sanitize_document_url(raw, base);
    if is_placeholder(&url) {
        return gradient;
    }
    format!(
        "{gradient} background-image: url({}); background-size: cover; background-position: center;",
        css_string(&url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color_filter() {
        assert_eq!(css_color("#c2410c"), Some("#c2410c"));
        assert_eq!(css_color(" rebeccapurple "), Some("rebeccapurple"));
        assert_eq!(css_color("rgb(10, 20, 30)"), Some("rgb(10, 20, 30)"));
        assert_eq!(css_color("red; background: url(x)"), None);
        assert_eq!(css_color("url(evil)"), None);
        assert_eq!(css_color(""), None);
    }

    #[test]
    fn test_css_string_escapes_quotes() {
        assert_eq!(css_string(r#"a"b\c"#), r#""a\22 b\5c c""#);
    }

    #[test]
    fn test_gradient_fallback_color() {
        assert!(cover_gradient(None).contains(DEFAULT_COVER_COLOR));
        assert!(cover_gradient(Some("#123456")).contains("#123456"));
        assert!(cover_gradient(Some("x;y")).contains(DEFAULT_COVER_COLOR));
    }

    #[test]
    fn test_cover_style_with_image() {
        let mut book = Book::new("b", "B");
        book.img = Some("covers/b.jpg".to_string());
        let style = cover_style(&book, Some("https://site.example/"));
        assert!(style.contains(r#"url("https://site.example/covers/b.jpg")"#));
    }

    #[test]
    fn test_cover_style_rejects_script_image() {
        let mut book = Book::new("b", "B");
        book.img = Some("javascript:alert(1)".to_string());
        let style = cover_style(&book, Some("https://site.example/"));
        assert!(!style.contains("javascript"));
        assert!(!style.contains("background-image"));
    }
}
