//! Error type for the browser core.
//!
//! Every file-system failure the browser can recover from is a [BrowserError].
//! At startup these are fatal; during a session they are turned into a status line
//! by the handlers.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    /// Reading a directory or mutating an entry failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path could not be resolved, or a user supplied name is not a valid entry name.
    #[error("{}: {reason}", .path.display())]
    Path { path: PathBuf, reason: String },

    /// The system trash refused the entry.
    #[error("{}: trash failed: {reason}", .path.display())]
    Trash { path: PathBuf, reason: String },
}

impl BrowserError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BrowserError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BrowserError::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The path the failed operation was working on.
    pub fn target(&self) -> &Path {
        match self {
            BrowserError::Io { path, .. }
            | BrowserError::Path { path, .. }
            | BrowserError::Trash { path, .. } => path,
        }
    }

    /// The io::ErrorKind behind the failure, if there was one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            BrowserError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type BrowserResult<T> = Result<T, BrowserError>;
