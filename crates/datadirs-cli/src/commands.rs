//! Available commands.

use clap::Subcommand;

use crate::config_commands::ConfigCommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the data directories and show them (the default)
    Paths {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every source and the candidates it contributes, without probing
    Candidates,

    /// Resolve the data directories and print the first match for a file
    Find {
        /// Path relative to a data directory (e.g. "maps/delta.smf")
        relative: String,
    },

    /// View or change the data directory override in the rc file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}
