//! Config command implementation.

use clap::{Parser, Subcommand};
use docsync_common_config::{ConfigLoader, DocsyncConfig};
use docsync_common_core::ResultExt;

use crate::cli::CommandContext;
use crate::error::CliError;

/// Inspect or create the configuration file
#[derive(Debug, Parser)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML
    Show,

    /// Print the location of the project config file
    Path,

    /// Write the default configuration to <root>/.docsync/config.yaml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let loader = ConfigLoader::new(&ctx.root);

        match &self.action {
            ConfigAction::Show => {
                let yaml = serde_yaml::to_string(&ctx.config)
                    .context("failed to serialize configuration")?;
                print!("{yaml}");
            }
            ConfigAction::Path => {
                let path = ctx.config_path.clone().unwrap_or_else(|| loader.config_path());
                println!("{}", path.display());
            }
            ConfigAction::Init { force } => {
                let path = loader.config_path();
                if path.exists() && !force {
                    return Err(CliError::Config {
                        message: format!("config file already exists: {}", path.display()),
                        source: None,
                        hint: Some("pass --force to overwrite it".to_string()),
                    });
                }
                let written = loader.save(&DocsyncConfig::default())?;
                ctx.say(format!("Configuración escrita en {}", written.display()));
            }
        }

        Ok(())
    }
}
