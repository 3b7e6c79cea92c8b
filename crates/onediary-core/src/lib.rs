//! OneDiary Core Library
//!
//! Framework-free logic for the OneDiary feed screen: relative date labels,
//! the loading-phase state machine with its pulsing-dot signals, and the
//! projection of posts into a renderable view model.
//!
//! ## Overview
//!
//! The screen has exactly two phases. While loading, a staggered set of
//! pulsing dots is shown; once the ready timer fires, the diary feed replaces
//! it. All of that is modeled here without any rendering framework:
//!
//! - [`RelativeDateFormatter`] turns a post timestamp into the label shown
//!   under the user line ("今日", "昨日", or a ja-JP calendar date).
//! - [`LoadingController`] drives the dot signals and the one-shot
//!   loading → ready transition.
//! - [`project`] folds the current phase, the posts, and the dot signals
//!   into a [`FeedView`] the UI layer renders 1:1.
//!
//! ## Quick Start
//!
//! ```ignore
//! use onediary_core::{project, sample_posts, LoadingController, Phase};
//!
//! let controller = LoadingController::new();
//! controller.start();
//! controller.on_ready(|| println!("feed ready"));
//!
//! let posts = sample_posts();
//! let view = project(controller.phase(), &posts, &controller.signals(), chrono::Utc::now());
//! ```

pub mod error;
pub mod feed;
pub mod fixture;
pub mod loading;
pub mod reldate;
pub mod types;

// Re-exports
pub use error::{DiaryError, DiaryResult};
pub use feed::{project, DotModel, EntryBlockModel, FeedView, PostCardModel, LOADING_LABEL};
pub use fixture::{load_posts, sample_posts};
pub use loading::{LoadingController, Phase, DOT_COUNT, FRAME, RAMP, READY_DELAY, STAGGER};
pub use reldate::RelativeDateFormatter;
pub use types::{EntryRecord, PostRecord};
