//! `adr-index` and `session-index` commands.

use clap::Parser;
use docsync_index::{IndexRefresh, IndexUpdate};

use crate::cli::CommandContext;
use crate::error::CliError;

/// Regenerate an index table
#[derive(Debug, Parser)]
pub struct IndexCommand {}

impl IndexCommand {
    pub async fn execute_adr(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let update = ctx.pipeline()?.update_adr_index().await?;
        report_adr_index(ctx, &update);
        fail_on_anchor_miss(ctx, &[&update])
    }

    pub async fn execute_sessions(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let update = ctx.pipeline()?.update_session_index().await?;
        report_session_index(ctx, &update);
        fail_on_anchor_miss(ctx, &[&update])
    }
}

pub(crate) fn report_adr_index(ctx: &CommandContext, update: &IndexUpdate) {
    report(ctx, update, "Índice de ADRs", "directorio de ADRs");
}

pub(crate) fn report_session_index(ctx: &CommandContext, update: &IndexUpdate) {
    report(
        ctx,
        update,
        "Índice de reportes de sesión",
        "directorio de reportes de sesión",
    );
}

fn report(ctx: &CommandContext, update: &IndexUpdate, label: &str, source: &str) {
    match update.refresh {
        None => ctx.say(format!("No se encontró el {source}; {label} no modificado.")),
        Some(IndexRefresh::AnchorNotFound) => ctx.say(format!(
            "{label} sin tabla en {}; archivo no modificado.",
            update.path.display()
        )),
        Some(_) => ctx.say(format!(
            "{label} actualizado con {} entradas.",
            update.entries
        )),
    }
}

/// With `--strict`, a missing table heading is an error.
pub(crate) fn fail_on_anchor_miss(
    ctx: &CommandContext,
    updates: &[&IndexUpdate],
) -> Result<(), CliError> {
    let missing: Vec<_> = updates
        .iter()
        .filter(|u| u.anchor_missing())
        .map(|u| u.path.clone())
        .collect();

    if ctx.strict && !missing.is_empty() {
        return Err(CliError::anchors_not_found(missing));
    }
    Ok(())
}
