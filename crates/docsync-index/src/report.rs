//! Documents assembled from named sections.

use std::path::Path;

use docsync_common_fs as fs;
use tracing::info;

use crate::error::DocResult;

/// One named block of Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub body: String,
}

/// An ordered list of sections written out in full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDocument {
    sections: Vec<Section>,
}

impl ReportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    pub fn section(mut self, name: &'static str, body: impl Into<String>) -> Self {
        self.sections.push(Section {
            name,
            body: body.into(),
        });
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Body of the first section with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.body.as_str())
    }

    /// Section bodies concatenated in order, with no separator.
    pub fn render(&self) -> String {
        self.sections.iter().map(|s| s.body.as_str()).collect()
    }
}

/// Overwrite `path` with the rendered document.
pub fn write_document(path: &Path, document: &ReportDocument) -> DocResult<()> {
    let text = document.render();
    fs::write_string_atomic(path, &text)?;
    info!(path = %path.display(), bytes = text.len(), "document written");
    Ok(())
}
