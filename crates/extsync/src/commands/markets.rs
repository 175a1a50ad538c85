//! Markets command

use anyhow::{Context, Result};
use camino::Utf8Path;

use super::load_config;
use crate::cli::MarketsArgs;
use crate::output;

/// List markets and the code-marketplace command serving each
pub fn run(args: MarketsArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let markets = config
        .select_markets(&args.market)
        .context("Invalid market selection")?;

    if markets.is_empty() {
        output::info("No markets configured");
        return Ok(());
    }

    output::header("Markets");
    for (name, market) in &markets {
        output::kv(
            name,
            &format!("engine {}, directory {}", market.engine, market.directory),
        );
    }

    output::header("Suggested code-marketplace commands");
    for (name, market) in &markets {
        match market.serve_command() {
            Some(command) => println!("{}", command),
            None => println!(
                "# {}: no port configured; set one if you want a stable assignment.",
                name
            ),
        }
    }
    Ok(())
}
