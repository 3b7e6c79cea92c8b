//! UI components for the OneDiary screen.

mod diary_card;
mod loading_indicator;
mod post_feed;

pub use diary_card::DiaryCard;
pub use loading_indicator::LoadingIndicator;
pub use post_feed::PostFeed;
