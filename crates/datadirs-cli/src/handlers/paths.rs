//! Paths command handler.
//!
//! Resolves the data directories exactly as an application would at
//! start-up and shows the result.

use anyhow::Result;
use datadirs_core::{DataDirs, LogInitializer};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the paths command.
///
/// Prints one `rw`/`ro` line per directory, or the [`DataDirs`] as JSON.
pub fn execute(ctx: &CliContext, log: &mut dyn LogInitializer, json: bool) -> Result<()> {
    let data_dirs = resolve(ctx, log)?;
    if json {
        let rendered = serde_json::to_string_pretty(&data_dirs).map_err(CliError::from)?;
        println!("{rendered}");
    } else {
        println!("{data_dirs}");
    }
    Ok(())
}

/// Run the locater, mapping failure to a [`CliError`].
pub(crate) fn resolve(ctx: &CliContext, log: &mut dyn LogInitializer) -> Result<DataDirs> {
    ctx.locater
        .locate(log)
        .map_err(|e| CliError::from(e).into())
}
