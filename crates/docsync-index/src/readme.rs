//! Main README regeneration.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, Instrument};

use crate::error::DocResult;
use crate::pipeline::{load_records, Pipeline};
use crate::record::Record;
use crate::report::{write_document, ReportDocument};
use crate::scanner::scan_dir;
use crate::table::most_recent;

pub const ADR_DIR_NOT_FOUND: &str = "No se encontró el directorio de ADRs";
pub const SESSION_DIR_NOT_FOUND: &str = "No se encontró el directorio de reportes de sesión";

/// Recent records, or `None` when the source directory is missing.
type Recent = Option<Vec<Record>>;

impl Pipeline {
    async fn recent_adrs(&self) -> DocResult<Recent> {
        let scan = scan_dir(&self.paths.adr_dir, &self.adr_rules).await?;
        if scan.is_missing() {
            return Ok(None);
        }
        let records = load_records(&scan, &self.adr_extractor);
        Ok(Some(most_recent(&records, self.config.readme.recent_count)))
    }

    async fn recent_sessions(&self) -> DocResult<Recent> {
        let scan = scan_dir(&self.paths.session_reports_dir, &self.session_rules).await?;
        if scan.is_missing() {
            return Ok(None);
        }
        let records = load_records(&scan, &self.session_extractor);
        Ok(Some(most_recent(&records, self.config.readme.recent_count)))
    }

    /// Assemble the README for the given generation date.
    pub async fn render_readme(&self, today: NaiveDate) -> DocResult<ReportDocument> {
        let readme = &self.config.readme;
        let paths = &self.paths;
        let index_file = &self.config.index.index_file;

        let adrs = recent_list(
            "Decisiones Arquitectónicas Recientes",
            self.recent_adrs().await?,
            ADR_DIR_NOT_FOUND,
            |file| paths.readme_link_to_adr(file),
            &format!(
                "[Ver todas las decisiones arquitectónicas]({})",
                paths.readme_link_to_adr(index_file)
            ),
        );
        let sessions = recent_list(
            "Reportes de Sesión Recientes",
            self.recent_sessions().await?,
            SESSION_DIR_NOT_FOUND,
            |file| paths.readme_link_to_session(file),
            &format!(
                "[Ver todos los reportes de sesión]({})",
                paths.readme_link_to_session(index_file)
            ),
        );

        Ok(ReportDocument::new()
            .section(
                "header",
                format!(
                    "# {}\n\n*Última actualización: {}*\n\n{}\n",
                    readme.title,
                    today.format("%Y-%m-%d"),
                    readme.intro
                ),
            )
            .section("description", readme.description.clone())
            .section("recent_adrs", adrs)
            .section("recent_sessions", sessions)
            .section("structure", readme.structure.clone())
            .section("deployment", readme.deployment.clone())
            .section("next_steps", readme.next_steps.clone())
            .section("footer", readme.footer.clone()))
    }

    /// Regenerate the main README. Returns the path written.
    pub async fn generate_readme(&self, today: NaiveDate) -> DocResult<PathBuf> {
        let span = docsync_common_log::spans::job_span("readme");
        async {
            let document = self.render_readme(today).await?;
            write_document(&self.paths.readme, &document)?;
            info!("README regenerated");
            Ok(self.paths.readme.clone())
        }
        .instrument(span)
        .await
    }
}

fn recent_list(
    heading: &str,
    records: Recent,
    not_found: &str,
    link: impl Fn(&str) -> String,
    see_all: &str,
) -> String {
    let mut out = format!("\n## {heading}\n\n");
    match records {
        Some(records) => {
            for record in records {
                out.push_str(&format!(
                    "- **{}**: [{}]({})\n",
                    record.date,
                    record.title,
                    link(&record.source_file)
                ));
            }
        }
        None => out.push_str(&format!("- {not_found}\n")),
    }
    out.push_str(&format!("\n{see_all}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsync_common_config::DocsyncConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[tokio::test]
    async fn test_readme_recent_sections() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "docs/adr/0001-a.md", "# A\nFecha: 2024-01-01\n");
        write(temp.path(), "docs/adr/0002-b.md", "# B\nFecha: 2024-03-01\n");
        write(temp.path(), "docs/adr/0003-c.md", "# C\n");
        write(temp.path(), "docs/adr/0004-d.md", "# D\nFecha: 2024-02-01\n");
        write(
            temp.path(),
            "docs/session-reports/2024-04-02-api.md",
            "# Reporte de Avance: API\n",
        );

        let pipeline = Pipeline::new(temp.path(), DocsyncConfig::default()).unwrap();
        let doc = pipeline.render_readme(today()).await.unwrap();

        assert_eq!(
            doc.get("recent_adrs"),
            Some(
                "\n## Decisiones Arquitectónicas Recientes\n\n\
                 - **2024-03-01**: [B](docs/adr/0002-b.md)\n\
                 - **2024-02-01**: [D](docs/adr/0004-d.md)\n\
                 - **2024-01-01**: [A](docs/adr/0001-a.md)\n\
                 \n[Ver todas las decisiones arquitectónicas](docs/adr/README.md)\n"
            )
        );
        assert_eq!(
            doc.get("recent_sessions"),
            Some(
                "\n## Reportes de Sesión Recientes\n\n\
                 - **2024-04-02**: [API](docs/session-reports/2024-04-02-api.md)\n\
                 \n[Ver todos los reportes de sesión](docs/session-reports/README.md)\n"
            )
        );
    }

    #[tokio::test]
    async fn test_readme_header_and_missing_dirs() {
        let temp = TempDir::new().unwrap();
        let mut config = DocsyncConfig::default();
        config.readme.title = "Demo".to_string();
        config.readme.intro = "Intro.".to_string();

        let pipeline = Pipeline::new(temp.path(), config).unwrap();
        let doc = pipeline.render_readme(today()).await.unwrap();
        let text = doc.render();

        assert!(text.starts_with("# Demo\n\n*Última actualización: 2024-05-01*\n\nIntro.\n"));
        assert!(text.contains("- No se encontró el directorio de ADRs\n"));
        assert!(text.contains("- No se encontró el directorio de reportes de sesión\n"));
    }

    #[tokio::test]
    async fn test_generate_readme_overwrites() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "README.md", "stale\n");

        let pipeline = Pipeline::new(temp.path(), DocsyncConfig::default()).unwrap();
        let path = pipeline.generate_readme(today()).await.unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.ends_with(&DocsyncConfig::default().readme.footer));
    }
}
