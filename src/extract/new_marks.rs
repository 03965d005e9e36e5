//! New-only extraction (strategy B).
//!
//! Visits every `.m-listLink` entry on the page and keeps only the
//! ones flagged with a "new" icon marker. Entries without the marker
//! are not candidates at all. When the markup nests a
//! `time[datetime]` element, its date becomes the item's `pubdate`
//! and is appended to the description.

use chrono::NaiveDate;
use scraper::{ElementRef, Html};
use url::Url;

use super::{anchor_title_and_link, selector, Item};

/// CSS selector for list-link entries.
const LIST_LINK: &str = ".m-listLink";

/// The two marker classes the site uses for "new" icons.
const NEW_MARKER_CLASSES: [&str; 2] = ["m-icnNew", "toggleIcnNew"];

/// Extract list-link entries carrying a "new" marker.
pub fn extract_new_marks(document: &Html, base: &Url) -> Vec<Item> {
    let list_link_sel = selector(LIST_LINK);
    let anchor_sel = selector("a[href]");
    let date_sel = selector("time[datetime]");

    let mut items = Vec::new();
    for entry in document.select(&list_link_sel) {
        if !has_new_marker(entry) {
            continue;
        }
        let Some(anchor) = entry.select(&anchor_sel).next() else {
            continue;
        };
        let Some((title, link)) = anchor_title_and_link(anchor, base) else {
            continue;
        };

        let pubdate = entry
            .select(&date_sel)
            .next()
            .and_then(|el| el.value().attr("datetime"))
            .and_then(parse_iso_date);

        let description = match pubdate {
            Some(date) => format!("{}（更新日: {}）", title, date.format("%Y-%m-%d")),
            None => title.clone(),
        };

        items.push(Item {
            title,
            link,
            description,
            pubdate,
        });
    }

    items
}

/// Check whether the entry carries a "new" icon, on itself or on any
/// descendant element.
fn has_new_marker(entry: ElementRef<'_>) -> bool {
    if entry
        .value()
        .classes()
        .any(|c| NEW_MARKER_CLASSES.contains(&c))
    {
        return true;
    }
    let marker_sel = selector(".m-icnNew, .toggleIcnNew");
    entry.select(&marker_sel).next().is_some()
}

/// Parse a `datetime` attribute value as an ISO calendar date.
/// Values that are not valid dates are treated as absent.
fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
