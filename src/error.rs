//! Error types for index generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every filesystem variant carries the offending path. None of them are
/// retried: the first one ends the whole multi-root run.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("{}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: not a dir", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{}: read dir: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: write failed: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: asset: {source}", .path.display())]
    AssetError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for IndexError {
    fn from(err: config::ConfigError) -> Self {
        IndexError::ConfigError(err.to_string())
    }
}
