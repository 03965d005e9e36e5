//! Link-item extraction from MHLW pages.
//!
//! Two strategies exist, bound per feed target:
//!
//! - [`Strategy::AllListLinks`] takes every list-item link inside the
//!   page's main content container.
//! - [`Strategy::NewOnly`] takes only list-link entries that carry a
//!   "new" icon marker, picking up the update date when the markup
//!   exposes one.
//!
//! Both are pure functions of the page HTML: the same input always
//! yields the same ordered item sequence.

mod list_links;
mod new_marks;

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub use list_links::extract_all_list_links;
pub use new_marks::extract_new_marks;

/// One extracted link, the unit converted into one feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Human-readable link text; falls back to the URL when the source
    /// text is empty.
    pub title: String,
    /// Absolute URL (relative hrefs resolved against the page URL).
    pub link: String,
    /// Feed body text; the title, optionally annotated with the
    /// update date.
    pub description: String,
    /// Publication date when the source page exposes one.
    pub pubdate: Option<NaiveDate>,
}

/// Extraction strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Every `li > a[href]` inside the main content container.
    AllListLinks,
    /// Only list-link entries flagged with a "new" icon.
    NewOnly,
}

/// Extract items from `html` according to `strategy`, resolving
/// relative links against `base`.
pub fn extract_items(html: &str, base: &Url, strategy: Strategy) -> Vec<Item> {
    let document = Html::parse_document(html);
    match strategy {
        Strategy::AllListLinks => extract_all_list_links(&document, base),
        Strategy::NewOnly => extract_new_marks(&document, base),
    }
}

/// Parse a selector that is known-valid at compile time.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Collapse runs of whitespace (including newlines) into single spaces
/// and trim the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the title/link pair for an anchor element, resolving `href`
/// against `base`. Returns `None` when the href does not resolve to a
/// URL; the caller skips such elements.
pub(crate) fn anchor_title_and_link(anchor: ElementRef<'_>, base: &Url) -> Option<(String, String)> {
    let href = anchor.value().attr("href")?;
    let link = base.join(href).ok()?.to_string();

    let mut title = collapse_whitespace(&anchor.text().collect::<Vec<_>>().join(" "));
    if title.is_empty() {
        // Image-only anchors and the like: use the URL as the title
        title = link.clone();
    }

    Some((title, link))
}
