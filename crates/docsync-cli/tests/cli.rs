mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn adr_index_updates_table_in_place() {
    let ctx = TestContext::new().with_sample_project();

    ctx.command()
        .arg("adr-index")
        .assert()
        .success()
        .stdout(predicate::str::contains("Índice de ADRs actualizado con 2 entradas."));

    assert_eq!(
        ctx.read("docs/adr/README.md"),
        "# ADRs\n\n## Índice de ADRs\n\n| Número | Título | Estado | Fecha |\n|--------|--------|--------|-------|\n| [ADR-001](./0001-foo.md) | Foo | Propuesto | Sin fecha |\n| [ADR-003](./0003-bar.md) | Bar | Aceptado | 2024-01-01 |\n\nFin.\n"
    );
}

#[test]
fn session_index_creates_missing_index() {
    let ctx = TestContext::new().with_sample_project();

    ctx.command()
        .arg("session-index")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Índice de reportes de sesión actualizado con 1 entradas.",
        ));

    assert_eq!(
        ctx.read("docs/session-reports/README.md"),
        "## Índice de Reportes\n| Fecha | Sesión | Enfoque Principal |\n|-------|--------|-------------------|\n| 2024-02-01 | [Inicio](./2024-02-01-inicio.md) | Primer sprint.... |\n"
    );
}

#[test]
fn anchor_miss_warns_and_strict_fails() {
    let ctx = TestContext::new()
        .with_sample_project()
        .with_file("docs/adr/README.md", "# ADRs sin tabla\n");

    ctx.command().arg("adr-index").assert().success();
    assert_eq!(ctx.read("docs/adr/README.md"), "# ADRs sin tabla\n");

    ctx.command()
        .args(["adr-index", "--strict"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("index table not found"));
    assert_eq!(ctx.read("docs/adr/README.md"), "# ADRs sin tabla\n");
}

#[test]
fn readme_uses_generation_date() {
    let ctx = TestContext::new().with_sample_project();

    ctx.command()
        .arg("readme")
        .assert()
        .success()
        .stdout(predicate::str::contains("README principal actualizado correctamente."));

    let readme = ctx.read("README.md");
    assert!(readme.contains("*Última actualización: 2024-05-01*"));
    assert!(readme.contains("- **2024-01-01**: [Bar](docs/adr/0003-bar.md)\n"));
}

#[test]
fn status_survives_missing_git() {
    let ctx = TestContext::new().with_sample_project();

    ctx.command().arg("status").assert().success();

    let status = ctx.read("docs/project-status.md");
    assert!(status.contains("Error al obtener contribuidores desde git"));
    assert!(status.contains("Error al obtener el historial de commits"));
    assert!(status.contains("- Total de ADRs: 2\n"));
}

#[test]
fn all_runs_every_generator() {
    let ctx = TestContext::new().with_sample_project();

    ctx.command().args(["all", "--quiet"]).assert().success().stdout("");

    assert!(ctx.path().join("README.md").exists());
    assert!(ctx.path().join("docs/project-status.md").exists());
    assert!(ctx.read("docs/adr/README.md").contains("ADR-003"));
    assert!(ctx.read("docs/session-reports/README.md").contains("Primer sprint"));
}

#[test]
fn config_paths_are_honored() {
    let ctx = TestContext::new()
        .with_config("paths:\n  adr_dir: decisions\n")
        .with_file("decisions/0001-x.md", "# X\n");

    ctx.command().arg("adr-index").assert().success();

    assert!(ctx.read("decisions/README.md").contains("| [ADR-001](./0001-x.md) | X |"));
}

#[test]
fn invalid_pattern_is_config_error() {
    let ctx = TestContext::new()
        .with_sample_project()
        .with_config("patterns:\n  adr_title: \"(unclosed\"\n");

    ctx.command().arg("all").assert().code(2);

    assert!(!ctx.path().join("README.md").exists());
}

#[test]
fn explicit_missing_config_fails() {
    let ctx = TestContext::new();

    ctx.command()
        .args(["--config", "nope.yaml", "readme"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config init"));
}

#[test]
fn config_init_then_show() {
    let ctx = TestContext::new();

    ctx.command().args(["config", "init"]).assert().success();
    assert!(ctx.path().join(".docsync/config.yaml").exists());

    ctx.command().args(["config", "init"]).assert().code(2);

    ctx.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adr_dir: docs/adr"));
}

#[test]
fn config_init_force_repairs_broken_file() {
    let ctx = TestContext::new().with_config("paths: [broken\n");

    ctx.command()
        .arg("readme")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid YAML"))
        .stderr(predicate::str::contains("\x1b[").not());

    ctx.command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".docsync/config.yaml"));

    ctx.command()
        .args(["config", "init", "--force"])
        .assert()
        .success();

    assert!(ctx.read(".docsync/config.yaml").contains("adr_dir: docs/adr"));
    ctx.command().arg("readme").assert().success();
}
