//! Exhaustive list-link extraction (strategy A).
//!
//! Scopes to the page's main content container and takes the first
//! `a[href]` of every `li` inside it. The kinnkyuuhininnyaku page
//! exposes no per-link dates, so `pubdate` is never populated here.

use scraper::Html;
use url::Url;

use super::{anchor_title_and_link, selector, Item};

/// CSS selector for the main content container on MHLW article pages.
const CONTENT_CONTAINER: &str = "div.l-contentMain";

/// Extract every list-item link inside the content container.
///
/// Returns an empty sequence when the container is absent; that is a
/// page-layout anomaly, not an error.
pub fn extract_all_list_links(document: &Html, base: &Url) -> Vec<Item> {
    let container_sel = selector(CONTENT_CONTAINER);
    let li_sel = selector("li");
    let anchor_sel = selector("a[href]");

    let Some(container) = document.select(&container_sel).next() else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for li in container.select(&li_sel) {
        let Some(anchor) = li.select(&anchor_sel).next() else {
            continue;
        };
        let Some((title, link)) = anchor_title_and_link(anchor, base) else {
            continue;
        };
        items.push(Item {
            description: title.clone(),
            title,
            link,
            pubdate: None,
        });
    }

    items
}
