//! Feed target definitions.
//!
//! Each target binds one source page to one output feed: the
//! extraction strategy decides which links on the page become items,
//! and the key policy decides which of those items count as
//! duplicates (and what the feed GUIDs look like). The three targets
//! cover two MHLW pages.

use crate::dedup::KeyPolicy;
use crate::extract::Strategy;

/// One feed target: a source page plus its extraction and identity
/// rules.
#[derive(Debug, Clone)]
pub struct FeedTarget {
    /// Output name; the feed is written to `<output dir>/<name>.xml`.
    pub name: &'static str,
    /// Source page URL, also used as the channel link and the base for
    /// resolving relative hrefs.
    pub page_url: &'static str,
    /// RSS channel title.
    pub feed_title: &'static str,
    /// RSS channel description.
    pub feed_description: &'static str,
    /// Extraction strategy for this page.
    pub strategy: Strategy,
    /// De-duplication and GUID key policy.
    pub key_policy: KeyPolicy,
}

impl FeedTarget {
    /// File name of the output feed.
    pub fn output_file(&self) -> String {
        format!("{}.xml", self.name)
    }
}

/// The 緊急避妊薬 topic page.
const KINNKYUUHININNYAKU_URL: &str = "https://www.mhlw.go.jp/stf/kinnkyuuhininnyaku.html";

/// The 緊急避妊薬 OTC sales page.
const OTC_KINKYUHININ_URL: &str =
    "https://www.mhlw.go.jp/stf/seisakunitsuite/bunya/kenkou_iryou/iyakuhin/otc_kinkyuhinin.html";

/// All configured feed targets, in run order.
pub const TARGETS: [FeedTarget; 3] = [
    FeedTarget {
        name: "kinnkyuuhininnyaku",
        page_url: KINNKYUUHININNYAKU_URL,
        feed_title: "緊急避妊薬（更新）",
        feed_description: "厚生労働省「緊急避妊薬」ページ内リンク一覧",
        strategy: Strategy::AllListLinks,
        key_policy: KeyPolicy::Url,
    },
    FeedTarget {
        name: "otc_kinkyuhinin",
        page_url: OTC_KINKYUHININ_URL,
        feed_title: "緊急避妊薬の販売（新着）",
        feed_description: "厚生労働省「緊急避妊薬の販売」ページ新着リンク一覧",
        strategy: Strategy::NewOnly,
        key_policy: KeyPolicy::Url,
    },
    // Same page as above, but revisions with a changed update date are
    // kept as distinct entries so readers surface them as unread again.
    FeedTarget {
        name: "otc_kinkyuhinin_koushin",
        page_url: OTC_KINKYUHININ_URL,
        feed_title: "緊急避妊薬の販売（更新日つき）",
        feed_description: "厚生労働省「緊急避妊薬の販売」ページ新着リンク一覧（更新日別）",
        strategy: Strategy::NewOnly,
        key_policy: KeyPolicy::UrlAndDate,
    },
];
