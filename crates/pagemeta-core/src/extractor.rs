//! Title and meta description extraction.
//!
//! The document is parsed with `scraper` (html5ever), so attribute order,
//! quoting, case and malformed markup do not matter. Extraction never fails;
//! anything missing comes back as `None`.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// The two fields printed by the CLI.
///
/// Absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageMetadata {
    /// Pretty-printed JSON (two-space indent), as written to stdout.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Extracts title and description from an HTML document.
pub fn extract(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);
    PageMetadata {
        title: extract_title(&document),
        description: extract_description(&document),
    }
}

/// Text of the first `<title>`, trimmed. `Some("")` if present but empty.
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// `<meta name="description">` first, then `<meta property="og:description">`.
fn extract_description(document: &Html) -> Option<String> {
    let selector = Selector::parse("meta").ok()?;
    let metas: Vec<ElementRef<'_>> = document.select(&selector).collect();

    meta_content(&metas, "name", "description")
        .or_else(|| meta_content(&metas, "property", "og:description"))
}

/// First non-empty, trimmed `content` of a meta whose `attr` equals `value` (ASCII case-insensitive).
fn meta_content(metas: &[ElementRef<'_>], attr: &str, value: &str) -> Option<String> {
    metas
        .iter()
        .filter(|el| {
            el.value()
                .attr(attr)
                .is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
        })
        .filter_map(|el| el.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}
