//! Root application component.
//!
//! Owns the loading controller for the screen's lifetime: starts it on
//! mount, mirrors its dot signals into Dioxus state while loading, switches
//! to the feed when the ready transition fires, and stops it on teardown.

use std::sync::Arc;

use chrono::Utc;
use dioxus::prelude::*;

use onediary_core::{
    fixture, project, FeedView, LoadingController, Phase, PostRecord, DOT_COUNT, FRAME,
};

use crate::components::{LoadingIndicator, PostFeed};
use crate::theme::GLOBAL_STYLES;

/// Posts for this screen: the `--posts` file if given, otherwise the built-in
/// sample feed. A bad file logs and falls back rather than showing nothing.
fn load_initial_posts() -> Vec<PostRecord> {
    match crate::posts_file() {
        Some(path) => match fixture::load_posts(&path) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!("failed to load posts from {}: {e}", path.display());
                fixture::sample_posts()
            }
        },
        None => fixture::sample_posts(),
    }
}

#[component]
pub fn App() -> Element {
    let controller = use_hook(|| Arc::new(LoadingController::new()));
    let posts = use_hook(load_initial_posts);
    let mut phase = use_signal(|| Phase::Loading);
    let mut dots = use_signal(|| [0.0_f64; DOT_COUNT]);

    // Start the controller on mount and pump its signals into Dioxus state
    // once per frame until the ready transition fires.
    use_effect({
        let controller = Arc::clone(&controller);
        move || {
            let controller = Arc::clone(&controller);
            spawn(async move {
                controller.start();

                let (tx, mut rx) = tokio::sync::oneshot::channel::<()>();
                controller.on_ready(move || {
                    let _ = tx.send(());
                });

                loop {
                    tokio::select! {
                        ready = &mut rx => {
                            if ready.is_ok() {
                                phase.set(Phase::Ready);
                            }
                            break;
                        }
                        _ = tokio::time::sleep(FRAME) => {
                            dots.set(controller.signals());
                        }
                    }
                }
            });
        }
    });

    // Cancellation on teardown: no signal update may fire after the screen
    // is gone.
    use_drop({
        let controller = Arc::clone(&controller);
        move || controller.stop()
    });

    let body = match project(phase(), &posts, &dots(), Utc::now()) {
        FeedView::Loading(dot_models) => rsx! {
            LoadingIndicator { dots: dot_models }
        },
        FeedView::Posts(cards) => rsx! {
            PostFeed { cards }
        },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "screen",
            h1 { class: "app-title", "OneDiary" }
            {body}
        }
    }
}
