//! ADR and session report index refreshes.

use std::path::PathBuf;

use tracing::{info, warn, Instrument};

use crate::error::DocResult;
use crate::pipeline::{load_records, Pipeline};
use crate::scanner::scan_dir;
use crate::splice::{refresh_index, IndexRefresh};
use crate::table::IndexTable;

/// Result of one index job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexUpdate {
    /// Index file targeted by the job.
    pub path: PathBuf,
    /// Rows in the rendered table.
    pub entries: usize,
    /// `None` when the source directory does not exist; nothing is written.
    pub refresh: Option<IndexRefresh>,
}

impl IndexUpdate {
    pub fn source_missing(&self) -> bool {
        self.refresh.is_none()
    }

    pub fn anchor_missing(&self) -> bool {
        self.refresh.is_some_and(|r| r.is_anchor_miss())
    }
}

impl Pipeline {
    /// Build the ADR table. Returns `None` when the ADR directory is missing.
    pub async fn adr_table(&self) -> DocResult<Option<IndexTable>> {
        let scan = scan_dir(&self.paths.adr_dir, &self.adr_rules).await?;
        if scan.is_missing() {
            return Ok(None);
        }
        let records = load_records(&scan, &self.adr_extractor);
        Ok(Some(IndexTable::adr(&self.config.index.adr_heading, records)))
    }

    /// Build the session report table. Returns `None` when the directory is missing.
    pub async fn session_table(&self) -> DocResult<Option<IndexTable>> {
        let scan = scan_dir(&self.paths.session_reports_dir, &self.session_rules).await?;
        if scan.is_missing() {
            return Ok(None);
        }
        let records = load_records(&scan, &self.session_extractor);
        Ok(Some(IndexTable::session_reports(
            &self.config.index.session_heading,
            records,
            self.config.index.summary_width,
        )))
    }

    /// Regenerate the table in the ADR index file.
    pub async fn update_adr_index(&self) -> DocResult<IndexUpdate> {
        let span = docsync_common_log::spans::job_span("adr-index");
        async {
            let table = self.adr_table().await?;
            self.apply(table, self.paths.adr_index.clone(), &self.adr_anchor)
        }
        .instrument(span)
        .await
    }

    /// Regenerate the table in the session report index file.
    pub async fn update_session_index(&self) -> DocResult<IndexUpdate> {
        let span = docsync_common_log::spans::job_span("session-index");
        async {
            let table = self.session_table().await?;
            self.apply(table, self.paths.session_index.clone(), &self.session_anchor)
        }
        .instrument(span)
        .await
    }

    fn apply(
        &self,
        table: Option<IndexTable>,
        path: PathBuf,
        anchor: &crate::splice::TableAnchor,
    ) -> DocResult<IndexUpdate> {
        let Some(table) = table else {
            warn!(path = %path.display(), "source directory not found, index not written");
            return Ok(IndexUpdate {
                path,
                entries: 0,
                refresh: None,
            });
        };

        let refresh = docsync_common_log::timed!("refresh_index", {
            refresh_index(&path, anchor, &table.render())
        })?;
        info!(entries = table.len(), outcome = ?refresh, "index refreshed");

        Ok(IndexUpdate {
            path,
            entries: table.len(),
            refresh: Some(refresh),
        })
    }
}
