//! Visual theme: color palette and global CSS.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
