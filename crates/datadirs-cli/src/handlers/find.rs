//! Find command handler.

use anyhow::Result;
use datadirs_core::LogInitializer;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::paths::resolve;

/// Execute the find command.
///
/// Prints the first `<dir>/<relative>` that exists, searching the data
/// directories in priority order.
pub fn execute(ctx: &CliContext, log: &mut dyn LogInitializer, relative: &str) -> Result<()> {
    let data_dirs = resolve(ctx, log)?;
    let found = data_dirs
        .find_file(relative, ctx.fs.as_ref())
        .ok_or_else(|| CliError::NotFound(format!("{relative} in any data directory")))?;
    println!("{}", found.display());
    Ok(())
}
