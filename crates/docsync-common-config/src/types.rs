//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::defaults;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsyncConfig {
    /// Input and output locations, relative to the project root.
    pub paths: PathsConfig,
    /// Index table settings.
    pub index: IndexConfig,
    /// Optional overrides for the metadata extraction patterns.
    pub patterns: PatternOverrides,
    /// Main README generation.
    pub readme: ReadmeConfig,
    /// Project status report generation.
    pub status: StatusConfig,
}

/// Paths used by the generators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding ADR files.
    pub adr_dir: PathBuf,
    /// Directory holding session reports.
    pub session_reports_dir: PathBuf,
    /// Application source directory inspected by the component check.
    pub src_dir: PathBuf,
    /// Main README regenerated in full.
    pub readme: PathBuf,
    /// Project status report regenerated in full.
    pub status_report: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            adr_dir: PathBuf::from("docs/adr"),
            session_reports_dir: PathBuf::from("docs/session-reports"),
            src_dir: PathBuf::from("src"),
            readme: PathBuf::from("README.md"),
            status_report: PathBuf::from("docs/project-status.md"),
        }
    }
}

/// Index table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Name of the index file inside each scanned directory.
    pub index_file: String,
    /// Extension (without dot) of indexed documents.
    pub extension: String,
    /// Heading that anchors the ADR table.
    pub adr_heading: String,
    /// Heading that anchors the session report table.
    pub session_heading: String,
    /// File names never indexed as ADRs.
    pub adr_excluded: Vec<String>,
    /// File names never indexed as session reports.
    pub session_excluded: Vec<String>,
    /// Characters of the summary kept in the session table.
    pub summary_width: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_file: "README.md".to_string(),
            extension: "md".to_string(),
            adr_heading: "## Índice de ADRs".to_string(),
            session_heading: "## Índice de Reportes".to_string(),
            adr_excluded: vec!["README.md".to_string(), "0000-template.md".to_string()],
            session_excluded: vec!["README.md".to_string()],
            summary_width: 50,
        }
    }
}

/// Regex overrides for metadata fields. `None` keeps the built-in pattern.
///
/// Each pattern must contain one capture group holding the field value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternOverrides {
    pub adr_title: Option<String>,
    pub adr_status: Option<String>,
    pub adr_date: Option<String>,
    pub session_title: Option<String>,
    pub session_summary: Option<String>,
    /// Applied to the file name, not the content.
    pub session_date: Option<String>,
}

/// Main README generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadmeConfig {
    pub title: String,
    pub intro: String,
    pub description: String,
    pub structure: String,
    pub deployment: String,
    pub next_steps: String,
    pub footer: String,
    /// Number of ADRs and session reports listed as recent.
    pub recent_count: usize,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            title: defaults::README_TITLE.to_string(),
            intro: defaults::README_INTRO.to_string(),
            description: defaults::README_DESCRIPTION.to_string(),
            structure: defaults::README_STRUCTURE.to_string(),
            deployment: defaults::README_DEPLOYMENT.to_string(),
            next_steps: defaults::README_NEXT_STEPS.to_string(),
            footer: defaults::README_FOOTER.to_string(),
            recent_count: 3,
        }
    }
}

/// A source component whose presence is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Display name.
    pub name: String,
    /// Path relative to the source directory; a trailing `/` marks a directory.
    pub path: String,
}

/// Marker files whose existence is reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Section heading.
    pub title: String,
    /// Paths relative to the project root.
    pub files: Vec<String>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            title: defaults::MARKERS_TITLE.to_string(),
            files: defaults::MARKER_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Git queries embedded in the status report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Window passed to `git shortlog --since`.
    pub contributors_since: String,
    /// Number of commits listed under recent activity.
    pub commit_limit: usize,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            contributors_since: "1 month ago".to_string(),
            commit_limit: 10,
        }
    }
}

/// Project status report generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub title: String,
    pub intro: String,
    /// Directory names skipped while counting files.
    pub skip_dirs: Vec<String>,
    /// Number of extensions listed in the statistics.
    pub top_extensions: usize,
    pub components: Vec<ComponentEntry>,
    pub markers: MarkerConfig,
    pub git: GitConfig,
    pub next_steps: String,
    pub footer: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            title: defaults::STATUS_TITLE.to_string(),
            intro: defaults::STATUS_INTRO.to_string(),
            skip_dirs: vec!["node_modules".to_string(), ".git".to_string()],
            top_extensions: 10,
            components: defaults::COMPONENTS
                .iter()
                .map(|(name, path)| ComponentEntry {
                    name: name.to_string(),
                    path: path.to_string(),
                })
                .collect(),
            markers: MarkerConfig::default(),
            git: GitConfig::default(),
            next_steps: defaults::STATUS_NEXT_STEPS.to_string(),
            footer: defaults::STATUS_FOOTER.to_string(),
        }
    }
}
