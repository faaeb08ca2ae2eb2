//! Configuration types for docsync.
//!
//! This crate provides the configuration used by the documentation
//! generators, read from `.docsync/config.yaml` files. Every field has a
//! default matching the repository layout the generators were written for,
//! so a project without a config file behaves exactly like the stock layout.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
