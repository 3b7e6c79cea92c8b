//! Diary post types
//!
//! This module provides the [`PostRecord`] and [`EntryRecord`] structs, the
//! immutable data the feed screen displays. Posts come from the built-in
//! fixture or from a JSON file passed on the command line.

use serde::{Deserialize, Serialize};

/// One photo+comment unit within a post.
///
/// Order within [`PostRecord::entries`] is display order and is never
/// reordered after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Opaque image locator (URL or asset path); resolution, caching and
    /// decoding are entirely the UI framework's concern
    pub image_ref: String,
    /// Caption text; may contain embedded newlines
    pub comment: String,
}

impl EntryRecord {
    /// Create a new EntryRecord.
    pub fn new(image_ref: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            comment: comment.into(),
        }
    }
}

/// One day's diary post: a titled card holding multiple photo+comment
/// entries.
///
/// Immutable once constructed. Callers must guarantee `id` values are unique
/// across the active collection; uniqueness is a documented precondition and
/// is not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Unique, stable identifier
    pub id: String,
    /// Card title (the diary day, e.g. "2025/04/05")
    pub title: String,
    /// Photo+comment entries, in display order
    pub entries: Vec<EntryRecord>,
    /// Author display name
    pub user: String,
    /// Location line, shown next to the relative date
    pub location: String,
    /// RFC 3339 instant. May be malformed; the date formatter falls back to
    /// the current date rather than failing (see [`crate::reldate`])
    pub timestamp: String,
    /// Decorative like counter (not interactive)
    #[serde(default)]
    pub likes: u32,
    /// Decorative comment counter (not interactive)
    #[serde(default)]
    pub comments: u32,
}
