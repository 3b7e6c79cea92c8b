//! Edge case and boundary condition tests
//!
//! These tests verify the formatter, projection, and posts-file loader
//! handle unusual inputs and boundary values correctly.

use std::io::Write;

use chrono::{DateTime, TimeZone, Utc};
use onediary_core::{
    load_posts, project, sample_posts, DiaryError, EntryRecord, FeedView, Phase, PostRecord,
    RelativeDateFormatter, DOT_COUNT,
};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

// ============================================================================
// Formatter Boundary Tests
// ============================================================================

/// Leap day labels correctly against the following day.
#[test]
fn test_leap_day_yesterday() {
    let fmt = RelativeDateFormatter::new();
    let now = at(2024, 3, 1, 9, 0);
    assert_eq!(fmt.format("2024-02-29T12:00:00Z", now), "昨日");
}

/// Two calendar days back is a plain date even when fewer than 48 hours
/// elapsed.
#[test]
fn test_two_calendar_days_back() {
    let fmt = RelativeDateFormatter::new();
    // Jan 1 23:30 vs Jan 3 00:30: 25 hours apart, two calendar days.
    let now = at(2025, 1, 3, 0, 30);
    assert_eq!(fmt.format("2025-01-01T23:30:00Z", now), "2025/1/1");
}

/// The unix epoch formats as its calendar date.
#[test]
fn test_epoch_timestamp() {
    let fmt = RelativeDateFormatter::new();
    let now = at(2025, 4, 5, 12, 0);
    assert_eq!(fmt.format("1970-01-01T00:00:00Z", now), "1970/1/1");
}

/// Every malformed input falls back to formatting the reference instant as a
/// calendar date.
#[test]
fn test_malformed_inputs_share_fallback() {
    let fmt = RelativeDateFormatter::new();
    let now = at(2025, 4, 5, 12, 0);
    let fallback = fmt.format("garbage", now);

    for raw in [
        "",
        "   ",
        "2025-04-05",            // date only, not an instant
        "2025-04-05 09:00:00",   // missing T and offset
        "2025-04-05T09:00:00",   // missing offset
        "Saturday, April 5th",
        "\u{1F4D3}",
    ] {
        assert_eq!(fmt.format(raw, now), fallback, "input: {raw:?}");
    }
}

// ============================================================================
// Projection Edge Cases
// ============================================================================

/// A post with no entries renders as a card with zero entry blocks.
#[test]
fn test_post_without_entries() {
    let post = PostRecord {
        id: "empty".to_string(),
        title: "2025/04/07".to_string(),
        entries: Vec::new(),
        user: "kei".to_string(),
        location: "Osaka, Japan".to_string(),
        timestamp: "2025-04-07T09:00:00Z".to_string(),
        likes: 0,
        comments: 0,
    };

    let view = project(Phase::Ready, &[post], &[0.0; DOT_COUNT], at(2025, 4, 7, 12, 0));
    let FeedView::Posts(cards) = view else {
        panic!("expected posts view");
    };
    assert_eq!(cards.len(), 1);
    assert!(cards[0].entries.is_empty());
}

/// Entry comments keep their embedded newlines through projection.
#[test]
fn test_entry_newlines_preserved() {
    let mut posts = sample_posts();
    posts.truncate(1);

    let view = project(Phase::Ready, &posts, &[0.0; DOT_COUNT], Utc::now());
    let FeedView::Posts(cards) = view else {
        panic!("expected posts view");
    };
    assert_eq!(cards[0].entries[2].comment, "夜はカレーを食べた\nお腹が痛い");
}

/// The sample fixture labels as 今日 and keeps the location prefix.
#[test]
fn test_sample_fixture_meta_lines() {
    let posts = sample_posts();
    let view = project(Phase::Ready, &posts, &[0.0; DOT_COUNT], Utc::now());
    let FeedView::Posts(cards) = view else {
        panic!("expected posts view");
    };
    assert_eq!(cards[0].meta, "Tokyo, Japan ・今日");
    assert_eq!(cards[1].meta, "Kyoto, Japan ・今日");
}

/// A malformed timestamp still produces a card; the meta line falls back to
/// the reference date.
#[test]
fn test_malformed_timestamp_still_renders() {
    let mut posts = sample_posts();
    posts[0].timestamp = "not-a-timestamp".to_string();

    let now = at(2025, 4, 5, 12, 0);
    let view = project(Phase::Ready, &posts, &[0.0; DOT_COUNT], now);
    let FeedView::Posts(cards) = view else {
        panic!("expected posts view");
    };
    assert_eq!(cards[0].meta, "Tokyo, Japan ・2025/4/5");
}

// ============================================================================
// Posts File Loader
// ============================================================================

/// A JSON array written to disk loads back identically.
#[test]
fn test_load_posts_round_trip() {
    let posts = vec![PostRecord {
        id: "42".to_string(),
        title: "2025/05/01".to_string(),
        entries: vec![EntryRecord::new("img://a", "お花見に行った")],
        user: "kei".to_string(),
        location: "Nara, Japan".to_string(),
        timestamp: "2025-05-01T10:00:00Z".to_string(),
        likes: 3,
        comments: 1,
    }];

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&posts).unwrap().as_bytes())
        .unwrap();

    let loaded = load_posts(file.path()).unwrap();
    assert_eq!(loaded, posts);
}

/// An empty JSON array is a valid, empty feed.
#[test]
fn test_load_empty_posts_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[]").unwrap();

    let loaded = load_posts(file.path()).unwrap();
    assert!(loaded.is_empty());
}

/// Malformed JSON surfaces as a PostsFile error, not a panic.
#[test]
fn test_load_malformed_posts_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ this is not json ").unwrap();

    let err = load_posts(file.path()).unwrap_err();
    assert!(matches!(err, DiaryError::PostsFile(_)));
}

/// A missing file surfaces as an Io error.
#[test]
fn test_load_missing_posts_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_posts(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DiaryError::Io(_)));
}
