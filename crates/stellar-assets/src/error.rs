//! Asset loading error types.

use std::path::PathBuf;

/// Reasons a model load can fail.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// No file exists at the requested path.
    #[error("model not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading the file failed part way.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but has no content.
    #[error("model file is empty: {}", .0.display())]
    Empty(PathBuf),

    /// The task was cancelled before it finished.
    #[error("model load cancelled")]
    Cancelled,

    /// The loader thread went away without reporting an outcome.
    #[error("loader thread terminated unexpectedly")]
    Disconnected,
}
