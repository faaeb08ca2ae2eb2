//! `readme` command.

use clap::Parser;

use crate::cli::CommandContext;
use crate::error::CliError;

/// Regenerate the main README
#[derive(Debug, Parser)]
pub struct ReadmeCommand {}

impl ReadmeCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        ctx.pipeline()?.generate_readme(ctx.today).await?;
        ctx.say("README principal actualizado correctamente.");
        Ok(())
    }
}
