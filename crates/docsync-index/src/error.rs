//! Error types for the generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning, extracting or writing documents.
#[derive(Debug, Error)]
pub enum DocError {
    /// A metadata pattern failed to compile.
    #[error("invalid pattern for {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// A metadata pattern compiled but has no group to capture the value.
    #[error("pattern for {field} has no capture group: {pattern}")]
    MissingCaptureGroup { field: String, pattern: String },

    /// Listing a directory failed for a reason other than absence.
    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file system error from the shared helpers.
    #[error(transparent)]
    Fs(#[from] docsync_common_core::Error),
}

/// Result type for pipeline operations.
pub type DocResult<T> = Result<T, DocError>;

impl DocError {
    /// Configuration problems are reported before any file is touched.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::MissingCaptureGroup { .. }
        )
    }
}
