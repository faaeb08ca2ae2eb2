//! Source directory scanning.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{DocError, DocResult};

/// Eligibility rules for a one-level directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    /// Required extension, without the dot.
    pub extension: String,
    /// File names never returned.
    pub excluded: Vec<String>,
}

impl ScanRules {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            excluded: Vec::new(),
        }
    }

    pub fn exclude(mut self, file_name: impl Into<String>) -> Self {
        self.excluded.push(file_name.into());
        self
    }

    /// Markdown files except the index and the template.
    pub fn adr() -> Self {
        Self::new("md").exclude("README.md").exclude("0000-template.md")
    }

    /// Markdown files except the index.
    pub fn session_reports() -> Self {
        Self::new("md").exclude("README.md")
    }

    /// Whether a file name passes the extension and exclusion rules.
    pub fn accepts(&self, file_name: &str) -> bool {
        let has_extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension);
        has_extension && !self.excluded.iter().any(|x| x == file_name)
    }
}

/// Result of scanning one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirScan {
    /// The directory does not exist. Callers render "not found".
    Missing,
    /// Eligible files, sorted by file name.
    Files(Vec<PathBuf>),
}

impl DirScan {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn files(&self) -> &[PathBuf] {
        match self {
            Self::Missing => &[],
            Self::Files(files) => files,
        }
    }

    pub fn len(&self) -> usize {
        self.files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files().is_empty()
    }
}

/// List the eligible files directly inside `dir`. Does not recurse.
pub async fn scan_dir(dir: &Path, rules: &ScanRules) -> DocResult<DirScan> {
    match fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            warn!(path = %dir.display(), "not a directory, treating as missing");
            return Ok(DirScan::Missing);
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %dir.display(), "directory not found");
            return Ok(DirScan::Missing);
        }
        Err(e) => return Err(scan_error(dir, e)),
    }

    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir).await.map_err(|e| scan_error(dir, e))?;

    while let Some(entry) = entries.next_entry().await.map_err(|e| scan_error(dir, e))? {
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if !rules.accepts(&name) {
            continue;
        }

        let path = entry.path();
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => files.push(path),
            Ok(_) => debug!(path = %path.display(), "skipping non-file entry"),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable entry"),
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(path = %dir.display(), count = files.len(), "directory scanned");
    Ok(DirScan::Files(files))
}

fn scan_error(dir: &Path, source: io::Error) -> DocError {
    DocError::Scan {
        path: dir.to_path_buf(),
        source,
    }
}

/// File counts keyed by extension with its leading dot (`.rs`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionCounts {
    counts: BTreeMap<String, usize>,
}

impl ExtensionCounts {
    pub fn record(&mut self, extension: &str) {
        *self.counts.entry(format!(".{extension}")).or_insert(0) += 1;
    }

    pub fn get(&self, extension: &str) -> usize {
        self.counts.get(extension).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most common extensions, by count descending then name.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(ext, count)| (ext.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

/// Count files below `root` by extension.
///
/// Directories whose name equals one of `skip_dirs` are not entered. Files
/// without an extension, dot-files included, are not counted. Unreadable
/// entries are skipped.
pub fn count_files_by_extension(root: &Path, skip_dirs: &[String]) -> ExtensionCounts {
    let mut counts = ExtensionCounts::default();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry, skip_dirs));

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                debug!("Error walking directory: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) {
            counts.record(ext);
        }
    }

    counts
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| skip_dirs.iter().any(|skip| skip == name))
}
