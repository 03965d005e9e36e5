//! mhlw-rss - RSS feeds for MHLW announcement pages
//!
//! Fetches two MHLW (厚生労働省) web pages, extracts list-link items
//! via CSS-selector HTML parsing, and writes RSS 2.0 feed files for
//! three configured targets.

pub mod config;
pub mod dedup;
pub mod error;
pub mod extract;
pub mod feed;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod site;

pub use config::Config;
pub use dedup::{dedup_items, KeyPolicy};
pub use error::{MhlwRssError, Result};
pub use extract::{extract_items, Item, Strategy};
pub use feed::{build_channel, write_feed};
pub use fetch::PageFetcher;
pub use pipeline::{generate, run_target};
pub use site::{FeedTarget, TARGETS};
