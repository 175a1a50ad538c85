//! Command implementations

pub mod markets;
pub mod plan;
pub mod resolve;

use anyhow::{Context, Result};
use camino::Utf8Path;
use extsync_core::{ConfigLoader, SyncConfig};
use tracing::debug;

/// Load configuration from an explicit file or the default hierarchy
pub fn load_config(path: Option<&Utf8Path>) -> Result<SyncConfig> {
    let loader = ConfigLoader::new().context("Failed to locate config directory")?;

    let config = match path {
        Some(path) => {
            debug!("Loading config from {}", path);
            loader
                .load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path))?
        }
        None => {
            debug!("Loading config from {}", loader.config_dir());
            loader.load().context("Failed to load configuration")?
        }
    };

    debug!(
        "Loaded {} market(s): {}",
        config.markets.len(),
        config.markets.keys().cloned().collect::<Vec<_>>().join(", ")
    );
    Ok(config)
}
