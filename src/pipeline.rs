//! The shared feed-generation pipeline.
//!
//! One run per target: fetch the page, extract candidate items,
//! de-duplicate, build the channel, write the file. The pure
//! [`generate`] step is separated from the network and file I/O so it
//! can be exercised on fixture HTML.

use std::path::Path;

use chrono::{DateTime, Utc};
use rss::Channel;
use tracing::{info, warn};
use url::Url;

use crate::dedup::dedup_items;
use crate::extract::extract_items;
use crate::feed::{build_channel, write_feed};
use crate::fetch::PageFetcher;
use crate::site::FeedTarget;
use crate::{MhlwRssError, Result};

/// Build the RSS channel for one target from already-fetched HTML.
pub fn generate(html: &str, target: &FeedTarget, now: DateTime<Utc>) -> Result<Channel> {
    let base = Url::parse(target.page_url)
        .map_err(|e| MhlwRssError::Config(format!("invalid page URL for {}: {}", target.name, e)))?;

    let items = extract_items(html, &base, target.strategy);
    let items = dedup_items(items, target.key_policy);

    Ok(build_channel(target, &items, now))
}

/// Fetch, generate, and write the feed for one target.
///
/// Returns the number of items written. A zero count is not an error;
/// an empty-channel feed is still written.
pub async fn run_target(
    fetcher: &PageFetcher,
    target: &FeedTarget,
    output_dir: &Path,
    now: DateTime<Utc>,
) -> Result<usize> {
    info!("Fetching {} ({})", target.name, target.page_url);
    let html = fetcher.fetch(target.page_url).await?;

    let channel = generate(&html, target, now)?;
    let count = channel.items().len();
    if count == 0 {
        warn!(
            "{}: no items extracted; writing an empty feed",
            target.name
        );
    }

    let path = output_dir.join(target.output_file());
    write_feed(&channel, &path)?;
    info!("Wrote {} item(s) to {}", count, path.display());

    Ok(count)
}
