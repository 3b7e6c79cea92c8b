//! Color constants for the OneDiary dark notebook look.

#![allow(dead_code)]

// === SCREEN ===
pub const SCREEN_BLACK: &str = "#000";
pub const CARD_DARK: &str = "#1a1a1a";

// === NOTEBOOK PAPER ===
pub const PAPER: &str = "#eee";
pub const PAPER_BORDER: &str = "#e0e0e0";
pub const HOLE: &str = "#ddd";
pub const RING_ARM: &str = "#bbb";

// === TEXT ===
pub const TEXT_WHITE: &str = "#fff";
pub const TEXT_MUTED: &str = "#888";
pub const TEXT_INK: &str = "#333";
pub const TEXT_BODY: &str = "#444";
pub const TEXT_COUNTER: &str = "#666";
