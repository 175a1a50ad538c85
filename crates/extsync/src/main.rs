//! extsync CLI - keep editor extensions aligned across VS Code forks
//!
//! Reads snapshot files produced elsewhere, runs the planner or resolver,
//! and prints the result. Installing, downloading and serving packages is
//! left to other tools.

mod cli;
mod commands;
mod output;
mod utils;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Plan(args) => commands::plan::run(args, config_path),
        Commands::Resolve(args) => commands::resolve::run(args, config_path),
        Commands::Markets(args) => commands::markets::run(args, config_path),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
