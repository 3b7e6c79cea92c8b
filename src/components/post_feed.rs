//! Post Feed Component
//!
//! Scrollable column of diary cards, in the order the projection produced
//! them.

use dioxus::prelude::*;
use onediary_core::PostCardModel;

use super::DiaryCard;

/// The ready-phase feed: one card per post.
#[component]
pub fn PostFeed(cards: Vec<PostCardModel>) -> Element {
    rsx! {
        div { class: "feed-scroll",
            for card in cards {
                DiaryCard { key: "{card.id}", card: card.clone() }
            }
        }
    }
}
