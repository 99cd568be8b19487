//! `<title>` extraction from an HTML document.

use scraper::{Html, Selector};

/// Returns the whitespace-collapsed text of the document's `<title>`.
///
/// The document is parsed with an HTML5 parser, so tag case, attributes
/// and character references (`&eacute;`, `&#8212;`, `&#x27;`) are handled
/// the way a browser handles them. Returns `None` if there is no title or
/// it is blank.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let title = document.select(&selector).next()?;
    let text = title.text().collect::<String>();
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
