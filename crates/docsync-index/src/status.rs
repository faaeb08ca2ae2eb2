//! Project status report.

use std::path::PathBuf;

use chrono::NaiveDate;
use docsync_common_config::ComponentEntry;
use docsync_common_fs as fs;
use docsync_git::HistorySource;
use tracing::{info, warn, Instrument};

use crate::error::DocResult;
use crate::pipeline::Pipeline;
use crate::readme::{ADR_DIR_NOT_FOUND, SESSION_DIR_NOT_FOUND};
use crate::report::{write_document, ReportDocument};
use crate::scanner::{count_files_by_extension, scan_dir, ExtensionCounts};

pub const NO_VALID_REPORT_DATE: &str = "No hay reportes con fecha válida";

/// ADR line of the documentation statistics.
pub fn adr_stats(count: Option<usize>) -> String {
    match count {
        Some(n) => format!("Total de ADRs: {n}"),
        None => ADR_DIR_NOT_FOUND.to_string(),
    }
}

/// Session report line of the documentation statistics.
pub fn session_stats(count: Option<usize>, latest: Option<NaiveDate>) -> String {
    match (count, latest) {
        (None, _) => SESSION_DIR_NOT_FOUND.to_string(),
        (Some(n), Some(date)) => format!(
            "Total de reportes: {n}, Reporte más reciente: {}",
            date.format("%Y-%m-%d")
        ),
        (Some(n), None) => format!("Total de reportes: {n}, {NO_VALID_REPORT_DATE}"),
    }
}

fn extension_lines(counts: &ExtensionCounts, top: usize) -> String {
    counts
        .top(top)
        .into_iter()
        .map(|(ext, count)| format!("- **{ext}**: {count} archivos\n"))
        .collect()
}

fn fenced(text: &str) -> String {
    format!("```text\n{text}\n```\n\n")
}

impl Pipeline {
    async fn documentation_stats(&self) -> DocResult<(String, String)> {
        let adrs = scan_dir(&self.paths.adr_dir, &self.adr_rules).await?;
        let adr_line = adr_stats((!adrs.is_missing()).then(|| adrs.len()));

        let sessions = scan_dir(&self.paths.session_reports_dir, &self.session_rules).await?;
        let latest = sessions
            .files()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .filter_map(|name| self.session_extractor.extract("", name).date().as_date())
            .max();
        let session_line = session_stats((!sessions.is_missing()).then(|| sessions.len()), latest);

        Ok((adr_line, session_line))
    }

    fn component_line(&self, component: &ComponentEntry) -> String {
        let path = self.paths.src_dir.join(component.path.trim_end_matches('/'));
        if fs::is_dir(&path) {
            match fs::count_entries(&path) {
                Ok(n) => format!("✅ {} ({n} archivos)", component.name),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot list component");
                    format!("✅ {}", component.name)
                }
            }
        } else if path.exists() {
            format!("✅ {}", component.name)
        } else {
            format!("❌ {} (No encontrado)", component.name)
        }
    }

    fn marker_line(&self, file: &str) -> String {
        if self.paths.root.join(file).exists() {
            format!("✅ {file}")
        } else {
            format!("❌ {file}")
        }
    }

    /// Assemble the status report for the given generation date.
    pub async fn render_status(
        &self,
        today: NaiveDate,
        history: &dyn HistorySource,
    ) -> DocResult<ReportDocument> {
        let status = &self.config.status;

        let contributors = history.contributors(&status.git.contributors_since).await;
        let commits = history.recent_commits(status.git.commit_limit).await;

        let counts = count_files_by_extension(&self.paths.root, &status.skip_dirs);
        let (adr_line, session_line) = self.documentation_stats().await?;

        let components: Vec<String> = status
            .components
            .iter()
            .map(|c| self.component_line(c))
            .collect();
        let markers: Vec<String> = status
            .markers
            .files
            .iter()
            .map(|f| self.marker_line(f))
            .collect();

        Ok(ReportDocument::new()
            .section(
                "header",
                format!(
                    "# {}\n\n*Generado automáticamente el: {}*\n\n{}\n\n",
                    status.title,
                    today.format("%Y-%m-%d"),
                    status.intro
                ),
            )
            .section(
                "contributors",
                format!("## Contribuidores Recientes\n\n{}", fenced(&contributors)),
            )
            .section(
                "activity",
                format!("## Actividad Reciente\n\n{}", fenced(&commits)),
            )
            .section(
                "statistics",
                format!(
                    "## Estadísticas del Proyecto\n\n### Archivos por Tipo\n\n{}\n### Documentación\n\n- {}\n- {}\n\n",
                    extension_lines(&counts, status.top_extensions),
                    adr_line,
                    session_line
                ),
            )
            .section(
                "components",
                format!("## Estado de Componentes\n\n{}\n\n", components.join("\n")),
            )
            .section(
                "markers",
                format!("## {}\n\n{}\n\n", status.markers.title, markers.join("\n")),
            )
            .section("next_steps", status.next_steps.clone())
            .section("footer", status.footer.clone()))
    }

    /// Regenerate the status report. Returns the path written.
    pub async fn generate_status(
        &self,
        today: NaiveDate,
        history: &dyn HistorySource,
    ) -> DocResult<PathBuf> {
        let span = docsync_common_log::spans::job_span("status");
        async {
            let document = self.render_status(today, history).await?;
            write_document(&self.paths.status_report, &document)?;
            info!("project status report generated");
            Ok(self.paths.status_report.clone())
        }
        .instrument(span)
        .await
    }
}
