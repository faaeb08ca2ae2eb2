//! `all` command.

use clap::Parser;
use docsync_git::GitCli;
use tracing::info;

use crate::cli::CommandContext;
use crate::commands::index::{fail_on_anchor_miss, report_adr_index, report_session_index};
use crate::error::CliError;

/// Run every generator: ADR index, session index, README, status report
#[derive(Debug, Parser)]
pub struct AllCommand {
    /// Git executable used for contributor and commit history
    #[arg(long, env = "DOCSYNC_GIT", default_value = "git")]
    pub git: String,
}

impl AllCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let pipeline = ctx.pipeline()?;

        let adrs = pipeline.update_adr_index().await?;
        report_adr_index(ctx, &adrs);

        let sessions = pipeline.update_session_index().await?;
        report_session_index(ctx, &sessions);

        pipeline.generate_readme(ctx.today).await?;
        ctx.say("README principal actualizado correctamente.");

        let history = GitCli::new(&ctx.root).with_program(&self.git);
        pipeline.generate_status(ctx.today, &history).await?;
        ctx.say("Reporte de estado actualizado correctamente.");

        info!("all generators finished");
        fail_on_anchor_miss(ctx, &[&adrs, &sessions])
    }
}
