//! Config command handler.
//!
//! Shows or edits the data directory key in the rc file. Other keys and
//! comments in the file are left untouched.

use anyhow::Result;
use datadirs_core::{ConfigStore, RcFileStore};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;

/// Execute the config command.
pub fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    let key = ctx.locater.config().config_key.clone();
    let mut store = RcFileStore::load(&ctx.rc_file).map_err(CliError::from)?;
    println!("{}", apply(&mut store, &key, command)?);
    Ok(())
}

fn apply(store: &mut RcFileStore, key: &str, command: ConfigCommand) -> Result<String> {
    let path = store.path().display().to_string();
    match command {
        ConfigCommand::Show => Ok(match store.get_string(key) {
            Some(list) => format!("{key}={list}"),
            None => format!("{key} is not set in {path}"),
        }),
        ConfigCommand::Set { list } => {
            store.set(key, &list).map_err(CliError::from)?;
            info!("Saved {key} to {path}");
            Ok(format!("✓ {key}={list}"))
        }
        ConfigCommand::Unset => {
            let removed = store.remove(key).map_err(CliError::from)?;
            Ok(if removed {
                format!("✓ Removed {key} from {path}")
            } else {
                format!("{key} was not set in {path}")
            })
        }
    }
}
