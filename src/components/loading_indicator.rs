//! Loading Indicator Component
//!
//! Three pulsing dots plus the loading label, shown until the feed is ready.
//! Opacity and lift come pre-interpolated in the [`DotModel`]s; this
//! component only paints them.

use dioxus::prelude::*;
use onediary_core::{DotModel, LOADING_LABEL};

/// Staggered pulsing-dot indicator.
#[component]
pub fn LoadingIndicator(dots: Vec<DotModel>) -> Element {
    rsx! {
        div { class: "loading-wrap",
            div { class: "loading-dots",
                for (index, dot) in dots.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "loading-dot",
                        style: "opacity: {dot.opacity}; transform: translateY({dot.offset_px}px);",
                    }
                }
            }
            p { class: "loading-label", {LOADING_LABEL} }
        }
    }
}
