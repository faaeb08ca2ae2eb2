//! Resolved project layout and the compiled generation pipeline.

use std::path::{Path, PathBuf};

use docsync_common_config::DocsyncConfig;
use docsync_common_fs::path;
use tracing::{debug, warn};

use crate::error::DocResult;
use crate::extract::Extractor;
use crate::record::Record;
use crate::scanner::{DirScan, ScanRules};
use crate::splice::TableAnchor;

/// Input and output locations resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub adr_dir: PathBuf,
    pub session_reports_dir: PathBuf,
    pub src_dir: PathBuf,
    pub readme: PathBuf,
    pub status_report: PathBuf,
    /// Index file inside the ADR directory.
    pub adr_index: PathBuf,
    /// Index file inside the session report directory.
    pub session_index: PathBuf,
    readme_dir: PathBuf,
    adr_dir_rel: PathBuf,
    session_reports_dir_rel: PathBuf,
}

impl ProjectPaths {
    pub fn resolve(root: impl AsRef<Path>, config: &DocsyncConfig) -> Self {
        let root = root.as_ref().to_path_buf();
        let paths = &config.paths;
        let index_file = &config.index.index_file;

        Self {
            adr_dir: root.join(&paths.adr_dir),
            session_reports_dir: root.join(&paths.session_reports_dir),
            src_dir: root.join(&paths.src_dir),
            readme: root.join(&paths.readme),
            status_report: root.join(&paths.status_report),
            adr_index: root.join(&paths.adr_dir).join(index_file),
            session_index: root.join(&paths.session_reports_dir).join(index_file),
            readme_dir: paths.readme.parent().map(Path::to_path_buf).unwrap_or_default(),
            adr_dir_rel: paths.adr_dir.clone(),
            session_reports_dir_rel: paths.session_reports_dir.clone(),
            root,
        }
    }

    /// Link from the main README to a file in the ADR directory.
    pub fn readme_link_to_adr(&self, file_name: &str) -> String {
        self.readme_link(&self.adr_dir_rel, file_name)
    }

    /// Link from the main README to a file in the session report directory.
    pub fn readme_link_to_session(&self, file_name: &str) -> String {
        self.readme_link(&self.session_reports_dir_rel, file_name)
    }

    fn readme_link(&self, dir: &Path, file_name: &str) -> String {
        path::to_unix_string(path::relative_to(dir, &self.readme_dir).join(file_name))
    }
}

/// Configuration compiled once per run: paths, scan rules, extractors and
/// table anchors. Building it validates every pattern, so configuration
/// errors surface before any file is written.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub(crate) config: DocsyncConfig,
    pub(crate) paths: ProjectPaths,
    pub(crate) adr_rules: ScanRules,
    pub(crate) session_rules: ScanRules,
    pub(crate) adr_extractor: Extractor,
    pub(crate) session_extractor: Extractor,
    pub(crate) adr_anchor: TableAnchor,
    pub(crate) session_anchor: TableAnchor,
}

impl Pipeline {
    pub fn new(root: impl AsRef<Path>, config: DocsyncConfig) -> DocResult<Self> {
        let paths = ProjectPaths::resolve(root, &config);
        let index = &config.index;

        let adr_rules = ScanRules {
            extension: index.extension.clone(),
            excluded: index.adr_excluded.clone(),
        };
        let session_rules = ScanRules {
            extension: index.extension.clone(),
            excluded: index.session_excluded.clone(),
        };

        Ok(Self {
            adr_extractor: Extractor::adr(&config.patterns)?,
            session_extractor: Extractor::session_report(&config.patterns)?,
            adr_anchor: TableAnchor::for_heading(&index.adr_heading)?,
            session_anchor: TableAnchor::for_heading(&index.session_heading)?,
            adr_rules,
            session_rules,
            paths,
            config,
        })
    }

    pub fn config(&self) -> &DocsyncConfig {
        &self.config
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    pub fn adr_extractor(&self) -> &Extractor {
        &self.adr_extractor
    }

    pub fn session_extractor(&self) -> &Extractor {
        &self.session_extractor
    }
}

/// Read and extract every scanned file. Unreadable files are skipped.
pub fn load_records(scan: &DirScan, extractor: &Extractor) -> Vec<Record> {
    let mut records = Vec::with_capacity(scan.len());

    for file in scan.files() {
        let Some(file_name) = file.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let span = docsync_common_log::spans::file_span("extract", file_name);
        let _guard = span.enter();

        match docsync_common_fs::read_to_string(file, docsync_common_fs::MAX_DOCUMENT_SIZE) {
            Ok(text) => {
                records.push(extractor.record(&text, file_name));
                debug!("metadata extracted");
            }
            Err(e) if e.is_not_found() => debug!("file removed during scan, skipping"),
            Err(e) => warn!(error = %e, "skipping unreadable file"),
        }
    }

    records
}
