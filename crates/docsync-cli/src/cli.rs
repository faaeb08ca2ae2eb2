//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use docsync_common_config::{ConfigLoader, DocsyncConfig};
use docsync_index::Pipeline;
use tracing::debug;

use crate::commands::{
    AllCommand, ConfigAction, ConfigCommand, IndexCommand, ReadmeCommand, StatusCommand,
};
use crate::error::CliError;

/// docsync - keeps ADR indexes, session report indexes, the main README
/// and the project status report in sync with the repository.
#[derive(Debug, Parser)]
#[command(
    name = "docsync",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Project root; every configured path is relative to it
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_hint = ValueHint::DirPath
    )]
    pub root: PathBuf,

    /// Path to configuration file (default: <root>/.docsync/config.yaml)
    #[arg(
        short,
        long,
        global = true,
        env = "DOCSYNC_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Fail when an index file has no table to replace
    #[arg(long, global = true)]
    pub strict: bool,

    /// Generation date written into reports (YYYY-MM-DD, default: today)
    #[arg(long, global = true, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate the ADR index table
    AdrIndex(IndexCommand),

    /// Regenerate the session report index table
    SessionIndex(IndexCommand),

    /// Regenerate the main README
    Readme(ReadmeCommand),

    /// Generate the project status report
    Status(StatusCommand),

    /// Run every generator in order
    All(AllCommand),

    /// Inspect or create the configuration file
    Config(ConfigCommand),
}

impl Cli {
    /// Load configuration from `--config` or the project default location.
    pub fn load_config(&self) -> Result<DocsyncConfig, CliError> {
        let loader = ConfigLoader::new(&self.root);
        let config = match &self.config {
            Some(path) => loader.load_file(path)?,
            None => loader.load()?,
        };
        debug!(root = %self.root.display(), "configuration loaded");
        Ok(config)
    }

    /// Whether the command needs the effective configuration. `config path`
    /// and `config init` must work while the config file is broken.
    fn needs_config(&self) -> bool {
        !matches!(
            &self.command,
            Command::Config(ConfigCommand {
                action: ConfigAction::Path | ConfigAction::Init { .. },
            })
        )
    }

    /// Execute the selected command
    pub async fn execute(self) -> Result<(), CliError> {
        let config = if self.needs_config() {
            self.load_config()?
        } else {
            DocsyncConfig::default()
        };
        let ctx = CommandContext {
            root: self.root,
            config_path: self.config,
            config,
            strict: self.strict,
            quiet: self.quiet,
            today: self.date.unwrap_or_else(|| chrono::Local::now().date_naive()),
        };

        match self.command {
            Command::AdrIndex(cmd) => cmd.execute_adr(&ctx).await,
            Command::SessionIndex(cmd) => cmd.execute_sessions(&ctx).await,
            Command::Readme(cmd) => cmd.execute(&ctx).await,
            Command::Status(cmd) => cmd.execute(&ctx).await,
            Command::All(cmd) => cmd.execute(&ctx).await,
            Command::Config(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub config: DocsyncConfig,
    pub strict: bool,
    pub quiet: bool,
    pub today: NaiveDate,
}

impl CommandContext {
    /// Compile the generation pipeline. Fails on invalid patterns.
    pub fn pipeline(&self) -> Result<Pipeline, CliError> {
        Ok(Pipeline::new(&self.root, self.config.clone())?)
    }

    /// Print a result line unless `--quiet` was given.
    pub fn say(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", message.as_ref());
        }
    }
}
