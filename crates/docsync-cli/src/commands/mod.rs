//! Command implementations.

mod all;
mod config;
mod index;
mod readme;
mod status;

pub use all::AllCommand;
pub use config::{ConfigAction, ConfigCommand};
pub use index::IndexCommand;
pub use readme::ReadmeCommand;
pub use status::StatusCommand;
