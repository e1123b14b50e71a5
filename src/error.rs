//! Error types for log scanning
//!
//! Classification outcomes (missing log, empty log, ...) are statuses, not
//! errors. Only conditions that stop the whole run end up here.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Fatal errors raised while scanning a log tree
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list log directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}
