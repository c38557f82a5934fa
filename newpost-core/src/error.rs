/// Structured error types for newpost-core library.
///
/// Uses `thiserror` so library consumers get structured, composable errors.
/// The binary (newpost-cli) wraps these in `anyhow` with step context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for newpost-core operations
#[derive(Error, Debug)]
pub enum PostError {
    /// Writing the post file failed
    #[error("Failed to write post {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// The working directory could not be determined
    #[error("Cannot determine current directory: {source}")]
    CurrentDir { source: io::Error },
}

/// Result type alias for newpost-core operations
pub type Result<T> = std::result::Result<T, PostError>;

impl PostError {
    /// Create a write error for the given destination
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a current-directory error
    pub fn current_dir(source: io::Error) -> Self {
        Self::CurrentDir { source }
    }
}
