//! Replacing an index table inside an existing Markdown document.

use std::path::Path;

use docsync_common_fs::{self as fs, MAX_DOCUMENT_SIZE};
use regex::{NoExpand, Regex};
use tracing::{debug, info, warn};

use crate::error::{DocError, DocResult};

/// Locates a table region by its heading.
///
/// The region is the heading line, optional blank lines, a header row, a
/// separator row and every following line whose first non-blank character
/// is `|`.
#[derive(Debug, Clone)]
pub struct TableAnchor {
    heading: String,
    pattern: Regex,
}

impl TableAnchor {
    pub fn for_heading(heading: &str) -> DocResult<Self> {
        let heading = heading.trim_end();
        let pattern = format!(
            r"(?m)^{}[ \t]*\r?\n(?:[ \t]*\r?\n)*[ \t]*\|[^\n]*\n[ \t]*\|[-:| \t]*\|[ \t\r]*$(?:\n[ \t]*\|[^\n]*)*",
            regex::escape(heading)
        );
        let pattern = Regex::new(&pattern).map_err(|source| DocError::InvalidPattern {
            field: format!("table heading {heading:?}"),
            source,
        })?;
        Ok(Self {
            heading: heading.to_string(),
            pattern,
        })
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Whether the document contains the anchored region.
    pub fn is_present(&self, document: &str) -> bool {
        self.pattern.is_match(document)
    }
}

/// Result of a splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// Every anchored region was replaced.
    Replaced { text: String, regions: usize },
    /// The document has no anchored region and was left as is.
    AnchorNotFound,
}

/// Replace the anchored table region(s) in `document` with `table`.
///
/// Bytes outside the regions are preserved. `table` is inserted literally.
pub fn splice_table(document: &str, anchor: &TableAnchor, table: &str) -> SpliceOutcome {
    let regions = anchor.pattern.find_iter(document).count();
    if regions == 0 {
        return SpliceOutcome::AnchorNotFound;
    }
    let text = anchor
        .pattern
        .replace_all(document, NoExpand(table))
        .into_owned();
    SpliceOutcome::Replaced { text, regions }
}

/// Outcome of refreshing an index file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRefresh {
    /// The table was replaced and the file rewritten.
    Updated { regions: usize },
    /// The table already matched; nothing was written.
    Unchanged,
    /// The file did not exist and was created with the table.
    Created,
    /// The file has no table under the heading; it was not modified.
    AnchorNotFound,
}

impl IndexRefresh {
    pub fn is_anchor_miss(&self) -> bool {
        matches!(self, Self::AnchorNotFound)
    }
}

/// Splice `table` into the index file at `path`.
pub fn refresh_index(path: &Path, anchor: &TableAnchor, table: &str) -> DocResult<IndexRefresh> {
    if !fs::is_file(path) {
        fs::write_string_atomic(path, &format!("{table}\n"))?;
        info!(path = %path.display(), "index file created");
        return Ok(IndexRefresh::Created);
    }

    let current = fs::read_to_string(path, MAX_DOCUMENT_SIZE)?;
    match splice_table(&current, anchor, table) {
        SpliceOutcome::AnchorNotFound => {
            warn!(
                path = %path.display(),
                heading = %anchor.heading(),
                "index table heading not found, file left unchanged"
            );
            Ok(IndexRefresh::AnchorNotFound)
        }
        SpliceOutcome::Replaced { text, .. } if text == current => {
            debug!(path = %path.display(), "index already up to date");
            Ok(IndexRefresh::Unchanged)
        }
        SpliceOutcome::Replaced { text, regions } => {
            fs::write_string_atomic(path, &text)?;
            Ok(IndexRefresh::Updated { regions })
        }
    }
}
