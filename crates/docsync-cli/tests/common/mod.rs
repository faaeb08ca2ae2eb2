//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with a temporary project root
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Write a file relative to the project root
    pub fn with_file(self, rel: &str, contents: &str) -> Self {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, contents).expect("Failed to write file");
        self
    }

    /// Write `.docsync/config.yaml`
    pub fn with_config(self, config: &str) -> Self {
        self.with_file(".docsync/config.yaml", config)
    }

    /// A small project with two ADRs and one session report
    pub fn with_sample_project(self) -> Self {
        self.with_file("docs/adr/0001-foo.md", "# Foo\n\n## Estado\n\nPropuesto\n")
            .with_file(
                "docs/adr/0003-bar.md",
                "# Bar\n\nFecha: 2024-01-01\n\n## Estado\n\nAceptado\n",
            )
            .with_file(
                "docs/adr/README.md",
                "# ADRs\n\n## Índice de ADRs\n\n| Número | Título | Estado | Fecha |\n|--------|--------|--------|-------|\n\nFin.\n",
            )
            .with_file(
                "docs/session-reports/2024-02-01-inicio.md",
                "# Reporte de Avance: Inicio\n\n## Resumen Ejecutivo\n\nPrimer sprint.\n",
            )
    }

    /// Get path to the project root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file relative to the project root
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).expect("Failed to read file")
    }

    /// Create a command rooted at this project with a fixed date
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("docsync").expect("Binary not found");
        cmd.current_dir(self.path())
            .env_remove("DOCSYNC_CONFIG")
            .env_remove("RUST_LOG")
            .env("DOCSYNC_GIT", "docsync-test-no-such-git")
            .env("NO_COLOR", "1")
            .args(["--date", "2024-05-01"]);
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
