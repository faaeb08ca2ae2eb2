//! Error types for docsync.

use thiserror::Error;

/// The main error type for docsync operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File system error carrying the offending path.
    #[error("{message}")]
    FileSystem {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a file system error for `path` wrapping an I/O failure.
    pub fn file_system(
        message: impl Into<String>,
        path: impl AsRef<std::path::Path>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.as_ref().to_string_lossy().to_string()),
            source: Some(Box::new(source)),
        }
    }

    /// Path associated with this error, if any.
    pub fn path(&self) -> Option<&str> {
        let Self::FileSystem { path, .. } = self;
        path.as_deref()
    }

    /// Whether this error was caused by a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileSystem {
                source: Some(source),
                ..
            } => source
                .downcast_ref::<std::io::Error>()
                .map(|e| e.kind() == std::io::ErrorKind::NotFound)
                .unwrap_or(false),
            _ => false,
        }
    }
}

/// Result type alias using docsync's Error.
pub type Result<T> = std::result::Result<T, Error>;
