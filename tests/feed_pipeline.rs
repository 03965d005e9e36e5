//! End-to-end pipeline tests on fixture HTML (no network).
//!
//! Exercises extract → dedup → build → write for both strategies and
//! both key policies, then reads the written files back.

use chrono::{TimeZone, Utc};
use mhlw_rss::{generate, write_feed, FeedTarget, KeyPolicy, Strategy};

fn target(strategy: Strategy, policy: KeyPolicy) -> FeedTarget {
    FeedTarget {
        name: "fixture_feed",
        page_url: "https://www.mhlw.go.jp/stf/kinnkyuuhininnyaku.html",
        feed_title: "固定ページフィード",
        feed_description: "テスト用フィード",
        strategy,
        key_policy: policy,
    }
}

fn run_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 15, 3, 30, 0).unwrap()
}

const LIST_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="ja">
<body>
  <div class="l-contentMain">
    <h1>緊急避妊薬</h1>
    <ul>
      <li><a href="/stf/shingi_0001.html">検討会議（第1回）資料</a></li>
      <li><a href="/content/shiryou.pdf">配布資料</a></li>
      <li><a href="/stf/shingi_0001.html">検討会議（第1回）資料（再掲）</a></li>
      <li>リンクのない項目</li>
      <li><a href="/content/empty.pdf">  </a></li>
    </ul>
  </div>
  <div class="l-footer">
    <ul><li><a href="/footer.html">フッター</a></li></ul>
  </div>
</body>
</html>"#;

const NEW_MARKS_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="ja">
<body>
  <div class="m-listLink">
    <span class="m-icnNew">NEW</span>
    <time datetime="2025-07-01">令和7年7月1日</time>
    <a href="/stf/newpage_0001.html">販売店舗一覧を更新しました</a>
  </div>
  <div class="m-listLink">
    <a href="/stf/oldpage.html">以前のお知らせ</a>
  </div>
  <div class="m-listLink">
    <span class="toggleIcnNew">NEW</span>
    <a href="/stf/newpage_0002.html">Q&amp;Aを追加しました</a>
  </div>
  <div class="m-listLink">
    <span class="m-icnNew">NEW</span>
    <time datetime="2025-07-10">令和7年7月10日</time>
    <a href="/stf/newpage_0001.html">販売店舗一覧を更新しました</a>
  </div>
</body>
</html>"#;

#[test]
fn list_page_dedups_by_url_and_keeps_order() {
    let channel = generate(
        LIST_PAGE,
        &target(Strategy::AllListLinks, KeyPolicy::Url),
        run_now(),
    )
    .unwrap();

    let links: Vec<_> = channel.items().iter().filter_map(|i| i.link()).collect();
    assert_eq!(
        links,
        [
            "https://www.mhlw.go.jp/stf/shingi_0001.html",
            "https://www.mhlw.go.jp/content/shiryou.pdf",
            "https://www.mhlw.go.jp/content/empty.pdf",
        ]
    );

    // First occurrence of the duplicated link wins
    assert_eq!(channel.items()[0].title(), Some("検討会議（第1回）資料"));

    // Whitespace-only anchor text: title falls back to the resolved URL
    assert_eq!(
        channel.items()[2].title(),
        Some("https://www.mhlw.go.jp/content/empty.pdf")
    );

    // URL-only policy: every GUID equals the link, non-permalink
    for item in channel.items() {
        let guid = item.guid().unwrap();
        assert_eq!(Some(guid.value()), item.link());
        assert!(!guid.is_permalink());
    }

    // Strategy A never has dates: all items share the run timestamp
    for item in channel.items() {
        assert_eq!(item.pub_date(), Some(run_now().to_rfc2822().as_str()));
    }
}

#[test]
fn absent_container_writes_empty_feed() {
    let channel = generate(
        "<html><body><p>準備中</p></body></html>",
        &target(Strategy::AllListLinks, KeyPolicy::Url),
        run_now(),
    )
    .unwrap();
    assert!(channel.items().is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rss_output").join("fixture_feed.xml");
    write_feed(&channel, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with('\u{FEFF}'));
    assert!(written.contains("<channel>"));
    assert!(!written.contains("<item>"));
}

#[test]
fn new_marks_page_url_only_policy() {
    let channel = generate(
        NEW_MARKS_PAGE,
        &target(Strategy::NewOnly, KeyPolicy::Url),
        run_now(),
    )
    .unwrap();

    // The unmarked entry contributes nothing; the repeated link
    // collapses to its first occurrence under the URL-only key.
    let links: Vec<_> = channel.items().iter().filter_map(|i| i.link()).collect();
    assert_eq!(
        links,
        [
            "https://www.mhlw.go.jp/stf/newpage_0001.html",
            "https://www.mhlw.go.jp/stf/newpage_0002.html",
        ]
    );

    for item in channel.items() {
        assert_eq!(Some(item.guid().unwrap().value()), item.link());
    }
}

#[test]
fn new_marks_page_url_and_date_policy() {
    let channel = generate(
        NEW_MARKS_PAGE,
        &target(Strategy::NewOnly, KeyPolicy::UrlAndDate),
        run_now(),
    )
    .unwrap();

    // Same link, different dates: both revisions survive
    assert_eq!(channel.items().len(), 3);
    assert_eq!(
        channel.items()[0].guid().unwrap().value(),
        "https://www.mhlw.go.jp/stf/newpage_0001.html#2025-07-01"
    );
    assert_eq!(
        channel.items()[1].guid().unwrap().value(),
        "https://www.mhlw.go.jp/stf/newpage_0002.html"
    );
    assert_eq!(
        channel.items()[2].guid().unwrap().value(),
        "https://www.mhlw.go.jp/stf/newpage_0001.html#2025-07-10"
    );

    // Dated entries carry the date in the description and a UTC
    // midnight pubDate; the date-less one uses the run timestamp.
    assert_eq!(
        channel.items()[0].description(),
        Some("販売店舗一覧を更新しました（更新日: 2025-07-01）")
    );
    assert_eq!(
        channel.items()[0].pub_date(),
        Some("Tue, 1 Jul 2025 00:00:00 +0000")
    );
    assert_eq!(channel.items()[1].description(), Some("Q&Aを追加しました"));
    assert_eq!(
        channel.items()[1].pub_date(),
        Some(run_now().to_rfc2822().as_str())
    );
}

#[test]
fn written_feed_round_trips_items_in_order() {
    let channel = generate(
        NEW_MARKS_PAGE,
        &target(Strategy::NewOnly, KeyPolicy::UrlAndDate),
        run_now(),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture_feed.xml");
    write_feed(&channel, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with('\u{FEFF}'));
    assert!(!written.contains('\r'));

    // Every deduplicated item appears exactly once, in feed order
    let first = written.find("stf/newpage_0001.html#2025-07-01").unwrap();
    let second = written.find("stf/newpage_0002.html").unwrap();
    let third = written.find("stf/newpage_0001.html#2025-07-10").unwrap();
    assert!(first < second && second < third);
    assert_eq!(written.matches("<item>").count(), 3);
    assert_eq!(written.matches("isPermaLink=\"false\"").count(), 3);
}

#[test]
fn generation_is_deterministic() {
    let a = generate(
        NEW_MARKS_PAGE,
        &target(Strategy::NewOnly, KeyPolicy::UrlAndDate),
        run_now(),
    )
    .unwrap();
    let b = generate(
        NEW_MARKS_PAGE,
        &target(Strategy::NewOnly, KeyPolicy::UrlAndDate),
        run_now(),
    )
    .unwrap();
    assert_eq!(a.to_string(), b.to_string());
}
