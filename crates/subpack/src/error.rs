//! Error types for proxy package operations.

use std::path::PathBuf;

/// Errors produced by discovery, generation, and cleanup.
///
/// Filesystem variants carry the path they failed on so callers see which
/// module or manifest was responsible without extra instrumentation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid source pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },

    #[error("failed to read package manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse package manifest '{path}': {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("package manifest '{path}' has no \"name\" field")]
    ManifestName { path: PathBuf },

    #[error("failed to serialize proxy descriptor: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
