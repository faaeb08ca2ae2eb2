//! Contributor and commit-log queries.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::{GitError, GitResult};

/// Text used in place of the contributor list when git fails.
pub const CONTRIBUTORS_ERROR: &str = "Error al obtener contribuidores desde git";

/// Text used in place of the commit history when git fails.
pub const HISTORY_ERROR: &str = "Error al obtener el historial de commits";

/// Source of the version-control text embedded in reports.
///
/// Implementations return display text and never fail.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Contributors with commit counts since `since` (a git date expression).
    async fn contributors(&self, since: &str) -> String;

    /// The last `limit` commits, one per line.
    async fn recent_commits(&self, limit: usize) -> String;
}

/// Queries the `git` command line in a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
}

impl GitCli {
    /// Run `git` inside `workdir`.
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            program: "git".to_string(),
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Use a different executable than `git` found on `PATH`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git with `args` and return its trimmed standard output.
    pub async fn run(&self, args: &[&str]) -> GitResult<String> {
        let command = format!("{} {}", self.program, args.join(" "));
        debug!(command = %command, workdir = %self.workdir.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn run_or(&self, args: &[&str], fallback: &str) -> String {
        match self.run(args).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "git query failed, using fallback text");
                fallback.to_string()
            }
        }
    }
}

#[async_trait]
impl HistorySource for GitCli {
    async fn contributors(&self, since: &str) -> String {
        let since = format!("--since={since}");
        self.run_or(
            &["shortlog", "-sne", "--all", "--no-merges", since.as_str()],
            CONTRIBUTORS_ERROR,
        )
        .await
    }

    async fn recent_commits(&self, limit: usize) -> String {
        let limit = limit.to_string();
        self.run_or(
            &[
                "log",
                "--pretty=format:%ad - %s (%an)",
                "--date=short",
                "-n",
                limit.as_str(),
            ],
            HISTORY_ERROR,
        )
        .await
    }
}
