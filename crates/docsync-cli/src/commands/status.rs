//! `status` command.

use clap::Parser;
use docsync_git::GitCli;

use crate::cli::CommandContext;
use crate::error::CliError;

/// Generate the project status report
#[derive(Debug, Parser)]
pub struct StatusCommand {
    /// Git executable used for contributor and commit history
    #[arg(long, env = "DOCSYNC_GIT", default_value = "git")]
    pub git: String,
}

impl StatusCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let history = GitCli::new(&ctx.root).with_program(&self.git);
        ctx.pipeline()?.generate_status(ctx.today, &history).await?;
        ctx.say("Reporte de estado actualizado correctamente.");
        Ok(())
    }
}
