//! CLI entry point.
//!
//! Logging starts on stderr, the context is composed in bootstrap, and the
//! command is dispatched. The file log is attached by the locater once the
//! write directory is known.

use std::process::ExitCode;

use clap::Parser;
use datadirs_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, logging};

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut logging = logging::init(cli.verbose);

    match run(cli, &mut logging) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli, logging: &mut logging::Logging) -> anyhow::Result<()> {
    let config = CliConfig::with_defaults(cli.rc_file)?;
    let ctx = bootstrap(config)?;

    match cli.command.unwrap_or(Commands::Paths { json: false }) {
        Commands::Paths { json } => handlers::paths::execute(&ctx, logging, json),
        Commands::Candidates => handlers::candidates::execute(&ctx),
        Commands::Find { relative } => handlers::find::execute(&ctx, logging, &relative),
        Commands::Config { command } => handlers::config::execute(&ctx, command),
    }
}
