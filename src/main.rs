#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Posts-file override, set from the command line
static POSTS_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Get the posts-file override, if one was passed
pub fn posts_file() -> Option<PathBuf> {
    POSTS_FILE.get().cloned()
}

/// OneDiary - a notebook-styled photo diary feed
#[derive(Parser, Debug)]
#[command(name = "onediary-desktop")]
#[command(about = "OneDiary - single-screen social diary feed")]
struct Args {
    /// JSON file with an array of posts (defaults to the built-in sample feed)
    #[arg(short, long)]
    posts: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if let Some(path) = args.posts {
        tracing::info!("using posts file: {}", path.display());
        let _ = POSTS_FILE.set(path);
    }

    // Phone-ish portrait window
    let window_width = 420.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("OneDiary")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
