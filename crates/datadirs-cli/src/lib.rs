//! `datadirs` command-line interface.
//!
//! Resolves the data directory search path the same way an application
//! embedding `datadirs-core` would, and shows or edits the configuration
//! that feeds it.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use config_commands::ConfigCommand;
pub use error::CliError;
pub use logging::Logging;
pub use parser::Cli;
