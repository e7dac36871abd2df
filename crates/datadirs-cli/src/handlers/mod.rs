//! Command handlers.
//!
//! Handlers follow the same pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Call the locater or the configuration store
//! - Format output for the terminal
//!
//! Failures are returned as [`CliError`](crate::CliError) inside `anyhow`, so
//! `main` can map them to an exit code.

pub mod candidates;
pub mod config;
pub mod find;
pub mod paths;
