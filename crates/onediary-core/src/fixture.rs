//! Built-in sample feed and the optional posts-file loader
//!
//! Posts are a static in-memory fixture; there is no fetch protocol. The
//! `--posts` flag can point the app at a JSON array on disk instead, mostly
//! useful for demos and manual testing.

use std::fs;
use std::path::Path;

use crate::error::DiaryResult;
use crate::types::{EntryRecord, PostRecord};

const PLACEHOLDER_TALL: &str = "https://placehold.jp/150x300.png";
const PLACEHOLDER_SQUARE: &str = "https://placehold.jp/150x150.png";

/// The built-in sample feed: two diary days, three entries each.
///
/// Timestamps are the current instant, so both cards label as "今日".
pub fn sample_posts() -> Vec<PostRecord> {
    let now = chrono::Utc::now().to_rfc3339();
    vec![
        PostRecord {
            id: "1".to_string(),
            title: "2025/04/05".to_string(),
            entries: vec![
                EntryRecord::new(PLACEHOLDER_TALL, "朝ごはんを食べた"),
                EntryRecord::new(PLACEHOLDER_TALL, "公園を散歩した"),
                EntryRecord::new(PLACEHOLDER_TALL, "夜はカレーを食べた\nお腹が痛い"),
            ],
            user: "kei".to_string(),
            location: "Tokyo, Japan".to_string(),
            timestamp: now.clone(),
            likes: 12,
            comments: 4,
        },
        PostRecord {
            id: "2".to_string(),
            title: "2025/04/06".to_string(),
            entries: vec![
                EntryRecord::new(PLACEHOLDER_SQUARE, "散歩してリフレッシュ🐾"),
                EntryRecord::new(PLACEHOLDER_SQUARE, "友達とカフェに行った"),
                EntryRecord::new(PLACEHOLDER_SQUARE, "映画を見た"),
            ],
            user: "kei".to_string(),
            location: "Kyoto, Japan".to_string(),
            timestamp: now,
            likes: 12,
            comments: 4,
        },
    ]
}

/// Load a post array from a JSON file.
pub fn load_posts(path: &Path) -> DiaryResult<Vec<PostRecord>> {
    let raw = fs::read_to_string(path)?;
    let posts: Vec<PostRecord> = serde_json::from_str(&raw)?;
    tracing::info!("loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}
