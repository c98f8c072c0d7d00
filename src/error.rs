//! Error types for filesets
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::{ManifestError, ResolveError};

/// Result type alias for filesets operations
pub type FilesetsResult<T> = Result<T, FilesetsError>;

/// Main error type for filesets operations
#[derive(Error, Debug)]
pub enum FilesetsError {
    /// Manifest could not be loaded or classified
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Requested list does not exist
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Config file is not valid TOML or has wrong value types
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Resolution finished with issues and the caller asked for a hard failure
    #[error("{count} resolution issue(s) while resolving '{list}'\n  → Fix: Define the missing lists or break the cycle, or drop --strict")]
    UnresolvedIssues { list: String, count: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
