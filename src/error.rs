//! Error types for the listing engine

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by listing operations.
///
/// None of these are fatal to a walk as a whole: an unreadable subdirectory
/// is recorded and skipped, and only an unreadable root is returned as `Err`.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot open directory '{}': {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot access '{}': {source}", .path.display())]
    PathUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ListError {
    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ListError::DirectoryUnreadable { path, .. } | ListError::PathUnavailable { path, .. } => {
                Some(path)
            }
            ListError::Output(_) => None,
        }
    }
}
