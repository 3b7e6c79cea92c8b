//! Error types for OneDiary

use thiserror::Error;

/// Main error type for OneDiary operations.
///
/// The core itself performs no I/O; the only fallible surface is the
/// optional posts file loaded at startup.
#[derive(Error, Debug)]
pub enum DiaryError {
    /// General I/O error (reading a posts file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Posts file did not contain a valid post array
    #[error("Posts file error: {0}")]
    PostsFile(#[from] serde_json::Error),
}

/// Result type alias using DiaryError
pub type DiaryResult<T> = Result<T, DiaryError>;
