//! Git integration for docsync.
//!
//! Reports embed the raw text printed by `git shortlog` and `git log`. These
//! queries never fail from the caller's point of view: any problem (git not
//! installed, not a repository, non-zero exit) is logged and replaced by a
//! fixed message so the report is still written.

#![warn(missing_docs)]

pub mod error;
pub mod history;

pub use error::{GitError, GitResult};
pub use history::{GitCli, HistorySource, CONTRIBUTORS_ERROR, HISTORY_ERROR};
