//! Configuration management subcommands.

use clap::Subcommand;

/// Commands for the data directory key in the rc file.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the configured data directory list
    Show,
    /// Set the data directory list (delimiter separated, `$VARS` allowed)
    Set {
        /// Directory list, e.g. "$HOME/games:/srv/shared"
        list: String,
    },
    /// Remove the data directory list
    Unset,
}
