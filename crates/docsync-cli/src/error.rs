//! CLI error handling.

use std::path::PathBuf;
use std::process::ExitCode;

use docsync_common_config::ConfigError;
use docsync_index::DocError;
use thiserror::Error;

use crate::Exit;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Validation {
        message: String,
        paths: Vec<PathBuf>,
    },
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Validation { .. } => "E004",
        }
    }

    /// Get the exit status for this error
    pub fn exit(&self) -> Exit {
        match self {
            Self::Config { .. } => Exit::ConfigError,
            Self::Io { .. } => Exit::IoError,
            Self::Validation { .. } => Exit::ValidationError,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        self.exit().into()
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::Validation { .. } => {
                Some("add the table heading to the index file or run without --strict")
            }
            _ => None,
        }
    }

    /// Index files left untouched because their table heading is missing.
    pub fn anchors_not_found(paths: Vec<PathBuf>) -> Self {
        let listed = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::Validation {
            message: format!("index table not found in: {listed}"),
            paths,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::NotFound { .. } => {
                Some("run `docsync config init` to create a default configuration".to_string())
            }
            ConfigError::EnvVarNotFound { var } => {
                Some(format!("set {var} or use ${{{var}:-default}} in the config file"))
            }
            _ => None,
        };
        Self::Config {
            message: err.to_string(),
            source: Some(Box::new(err)),
            hint,
        }
    }
}

impl From<DocError> for CliError {
    fn from(err: DocError) -> Self {
        if err.is_config() {
            return Self::Config {
                message: err.to_string(),
                source: Some(Box::new(err)),
                hint: Some("check the `patterns` section of the config file".to_string()),
            };
        }

        let path = match &err {
            DocError::Scan { path, .. } => Some(path.clone()),
            DocError::Fs(e) => e.path().map(PathBuf::from),
            _ => None,
        };
        Self::Io {
            message: err.to_string(),
            source: Some(Box::new(err)),
            path,
        }
    }
}

impl From<docsync_common_core::Error> for CliError {
    fn from(err: docsync_common_core::Error) -> Self {
        DocError::from(err).into()
    }
}
