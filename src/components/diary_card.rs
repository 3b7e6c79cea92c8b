//! Diary Card Component
//!
//! One day's post: author line, notebook-paper inset with ring-binder holes,
//! the photo+comment entries, and the decorative counters.

use dioxus::prelude::*;
use onediary_core::PostCardModel;

/// Holes punched down the left edge of the notebook page.
const HOLE_COUNT: usize = 8;

/// A single diary post card.
#[component]
pub fn DiaryCard(card: PostCardModel) -> Element {
    rsx! {
        article { class: "diary-card",
            // Author line
            div { class: "card-user-row",
                div { class: "card-avatar" }
                div {
                    div { class: "card-user", "{card.user}" }
                    div { class: "card-meta", "{card.meta}" }
                }
            }

            // Notebook page
            div { class: "notebook",
                div { class: "notebook-holes",
                    for index in 0..HOLE_COUNT {
                        div { key: "{index}", class: "notebook-hole",
                            // horizontal ring arm
                            div { class: "notebook-ring" }
                        }
                    }
                }

                div { class: "notebook-page",
                    h2 { class: "card-title", "{card.title}" }

                    for (index, entry) in card.entries.iter().enumerate() {
                        div { key: "{index}", class: "entry-block",
                            img {
                                class: "entry-image",
                                src: "{entry.image_ref}",
                                alt: "{card.title}",
                            }
                            p { class: "entry-comment", "{entry.comment}" }
                        }
                    }
                }
            }

            // Decorative counters, not interactive
            div { class: "card-counters",
                span { class: "card-counter", "❤️ {card.likes}" }
                span { class: "card-counter", "💬 {card.comments}" }
            }
        }
    }
}
