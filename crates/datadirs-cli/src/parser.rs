//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for data directory resolution.
#[derive(Parser)]
#[command(name = "datadirs")]
#[command(about = "Locate, inspect and configure data directories")]
#[command(version)]
pub struct Cli {
    /// Use this rc file as the configuration store instead of ~/.datadirsrc
    #[arg(long = "rc-file", global = true, env = "DATADIRS_RC_FILE")]
    pub rc_file: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
