//! Feed projection
//!
//! Folds the current phase, the post collection, and the dot signals into a
//! framework-free view model. The UI layer renders a [`FeedView`] 1:1 and
//! holds no logic of its own: interpolation ranges, label text, and ordering
//! are all decided here, where they can be tested without a window.

use chrono::{DateTime, Utc};

use crate::loading::{Phase, DOT_COUNT};
use crate::reldate::RelativeDateFormatter;
use crate::types::PostRecord;

/// Static label shown under the pulsing dots.
pub const LOADING_LABEL: &str = "読み込み中...";

/// Separator between location and date label: "Tokyo, Japan ・今日".
const META_SEPARATOR: &str = " ・";

/// Dot opacity at signal 0; fades up to 1.0 at signal 1.
const OPACITY_FLOOR: f64 = 0.3;

/// Upward translation in px at signal 1.
const LIFT_PX: f64 = -4.0;

/// Visual attributes for one pulsing dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotModel {
    /// Opacity in [0.3, 1.0]
    pub opacity: f64,
    /// Vertical translation in px, in [-4.0, 0.0] (negative is up)
    pub offset_px: f64,
}

impl DotModel {
    /// Map a raw signal in [0, 1] to the visible dot ranges, linearly.
    pub fn from_signal(signal: f64) -> Self {
        let s = signal.clamp(0.0, 1.0);
        Self {
            opacity: OPACITY_FLOOR + (1.0 - OPACITY_FLOOR) * s,
            offset_px: LIFT_PX * s,
        }
    }
}

/// One image+comment block inside a card, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBlockModel {
    pub image_ref: String,
    pub comment: String,
}

/// One diary card, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCardModel {
    pub id: String,
    pub title: String,
    pub user: String,
    /// "location ・relative-date"
    pub meta: String,
    pub entries: Vec<EntryBlockModel>,
    pub likes: u32,
    pub comments: u32,
}

/// What the screen shows: pulsing dots while loading, cards once ready.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedView {
    Loading(Vec<DotModel>),
    Posts(Vec<PostCardModel>),
}

/// Project the current phase, posts, and dot signals into the view model.
///
/// Pure: never mutates its inputs. Post order and entry order are preserved
/// exactly; an empty post collection projects to an empty card list and a
/// post without entries to a card without entry blocks.
pub fn project(
    phase: Phase,
    posts: &[PostRecord],
    signals: &[f64; DOT_COUNT],
    now: DateTime<Utc>,
) -> FeedView {
    match phase {
        Phase::Loading => FeedView::Loading(
            signals
                .iter()
                .copied()
                .map(DotModel::from_signal)
                .collect(),
        ),
        Phase::Ready => {
            let formatter = RelativeDateFormatter::new();
            FeedView::Posts(
                posts
                    .iter()
                    .map(|post| project_post(post, &formatter, now))
                    .collect(),
            )
        }
    }
}

fn project_post(
    post: &PostRecord,
    formatter: &RelativeDateFormatter,
    now: DateTime<Utc>,
) -> PostCardModel {
    PostCardModel {
        id: post.id.clone(),
        title: post.title.clone(),
        user: post.user.clone(),
        meta: format!(
            "{}{}{}",
            post.location,
            META_SEPARATOR,
            formatter.format(&post.timestamp, now)
        ),
        entries: post
            .entries
            .iter()
            .map(|entry| EntryBlockModel {
                image_ref: entry.image_ref.clone(),
                comment: entry.comment.clone(),
            })
            .collect(),
        likes: post.likes,
        comments: post.comments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryRecord;
    use chrono::TimeZone;

    fn post(id: &str, entry_comments: &[&str]) -> PostRecord {
        PostRecord {
            id: id.to_string(),
            title: format!("title-{id}"),
            entries: entry_comments
                .iter()
                .map(|comment| EntryRecord::new(format!("img://{id}/{comment}"), *comment))
                .collect(),
            user: "kei".to_string(),
            location: "Tokyo, Japan".to_string(),
            timestamp: "2025-04-05T09:00:00Z".to_string(),
            likes: 12,
            comments: 4,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn dot_interpolation_endpoints() {
        let rest = DotModel::from_signal(0.0);
        assert_eq!(rest.opacity, 0.3);
        assert_eq!(rest.offset_px, 0.0);

        let peak = DotModel::from_signal(1.0);
        assert_eq!(peak.opacity, 1.0);
        assert_eq!(peak.offset_px, -4.0);
    }

    #[test]
    fn dot_interpolation_clamps_signal() {
        assert_eq!(DotModel::from_signal(-1.0), DotModel::from_signal(0.0));
        assert_eq!(DotModel::from_signal(2.0), DotModel::from_signal(1.0));
    }

    #[test]
    fn loading_phase_projects_one_dot_per_signal() {
        let view = project(Phase::Loading, &[post("1", &["a"])], &[0.0, 0.5, 1.0], now());
        match view {
            FeedView::Loading(dots) => {
                assert_eq!(dots.len(), DOT_COUNT);
                assert!(dots[0].opacity < dots[1].opacity);
                assert!(dots[1].opacity < dots[2].opacity);
            }
            FeedView::Posts(_) => panic!("expected loading view"),
        }
    }

    #[test]
    fn empty_post_collection_projects_to_zero_cards() {
        let view = project(Phase::Ready, &[], &[0.0; DOT_COUNT], now());
        assert_eq!(view, FeedView::Posts(Vec::new()));
    }

    #[test]
    fn post_and_entry_order_preserved() {
        let posts = vec![
            post("1", &["a", "b", "c"]),
            post("2", &["d", "e", "f"]),
            post("3", &["g", "h", "i"]),
        ];
        let view = project(Phase::Ready, &posts, &[0.0; DOT_COUNT], now());

        let FeedView::Posts(cards) = view else {
            panic!("expected posts view");
        };
        assert_eq!(
            cards.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3"]
        );
        assert_eq!(
            cards[0]
                .entries
                .iter()
                .map(|e| e.comment.as_str())
                .collect::<Vec<_>>(),
            ["a", "b", "c"]
        );
        assert_eq!(
            cards[2]
                .entries
                .iter()
                .map(|e| e.comment.as_str())
                .collect::<Vec<_>>(),
            ["g", "h", "i"]
        );
    }

    #[test]
    fn meta_line_joins_location_and_label() {
        let view = project(Phase::Ready, &[post("1", &[])], &[0.0; DOT_COUNT], now());
        let FeedView::Posts(cards) = view else {
            panic!("expected posts view");
        };
        assert_eq!(cards[0].meta, "Tokyo, Japan ・今日");
        assert!(cards[0].entries.is_empty());
    }
}
