//! RSS 2.0 feed construction and file output.
//!
//! Feeds are written as UTF-8 with a byte-order mark and Unix line
//! endings; Windows feed readers opening the file directly would
//! otherwise garble the Japanese titles.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveTime, Utc};
use rss::{Channel, ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::extract::Item;
use crate::site::FeedTarget;
use crate::{MhlwRssError, Result};

/// Build the RSS channel for one target from its deduplicated items.
///
/// `now` is the per-run timestamp sampled once in `main`; every
/// date-less item shares it, so client sort order among them follows
/// feed order instead of clock skew.
pub fn build_channel(target: &FeedTarget, items: &[Item], now: DateTime<Utc>) -> Channel {
    let entries: Vec<rss::Item> = items
        .iter()
        .map(|item| {
            let guid = GuidBuilder::default()
                .value(target.key_policy.key(item))
                .permalink(false)
                .build();

            let pub_date = match item.pubdate {
                Some(date) => date.and_time(NaiveTime::MIN).and_utc().to_rfc2822(),
                None => now.to_rfc2822(),
            };

            ItemBuilder::default()
                .title(item.title.clone())
                .link(item.link.clone())
                .description(item.description.clone())
                .guid(guid)
                .pub_date(pub_date)
                .build()
        })
        .collect();

    ChannelBuilder::default()
        .title(target.feed_title)
        .link(target.page_url)
        .description(target.feed_description)
        .language("ja".to_string())
        .last_build_date(now.to_rfc2822())
        .items(entries)
        .build()
}

/// Write a channel to `path` as pretty-printed XML, UTF-8 with BOM,
/// creating parent directories on demand.
pub fn write_feed(channel: &Channel, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let buf = channel
        .pretty_write_to(Vec::new(), b' ', 2)
        .map_err(|e| MhlwRssError::Feed(format!("failed to serialize feed: {}", e)))?;
    let xml = String::from_utf8(buf)
        .map_err(|e| MhlwRssError::Feed(format!("feed is not valid UTF-8: {}", e)))?;

    let mut out = String::with_capacity(xml.len() + 4);
    out.push('\u{FEFF}');
    out.push_str(&xml.replace("\r\n", "\n"));
    if !out.ends_with('\n') {
        out.push('\n');
    }

    fs::write(path, out)?;
    Ok(())
}
