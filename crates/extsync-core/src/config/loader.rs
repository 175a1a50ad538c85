//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.extsync/config.yaml, or an explicit path)
//! 3. Environment variables (EXTSYNC_* prefix)
//! 4. CLI flags (handled by caller)

use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use tracing::debug;

use super::{MarketConfig, SyncConfig};
use crate::error::{Error, Result};
use crate::utils::get_home_dir;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "sync-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Partial configuration as written in a user file
#[derive(Debug, Default, Deserialize)]
struct ConfigOverlay {
    #[serde(default)]
    policy: PolicyOverlay,

    #[serde(default)]
    markets: BTreeMap<String, MarketConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolicyOverlay {
    install_missing: Option<bool>,
    sync_removals: Option<bool>,
    sync_disabled: Option<bool>,
    force: Option<bool>,
}

/// Configuration hierarchy loader
pub struct ConfigLoader {
    /// Directory holding the user config file
    config_dir: Utf8PathBuf,
}

impl ConfigLoader {
    /// Create a loader rooted at ~/.extsync
    pub fn new() -> Result<Self> {
        let home = get_home_dir()?;
        let home = Utf8PathBuf::from_path_buf(home)
            .map_err(|p| Error::invalid_config(format!("Non UTF-8 home directory: {:?}", p)))?;
        Ok(Self {
            config_dir: home.join(".extsync"),
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Load configuration from defaults, the user file if present, and the environment
    pub fn load(&self) -> Result<SyncConfig> {
        let mut config = Self::load_defaults()?;

        let user_path = self.config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            debug!("Loading user config from {}", user_path);
            config = Self::merge(config, Self::read_overlay(&user_path)?);
        }

        Self::apply_env_overrides(config)
    }

    /// Load configuration using an explicit file instead of the user file
    pub fn load_from_file(&self, path: &Utf8Path) -> Result<SyncConfig> {
        if !path.exists() {
            return Err(Error::config_not_found(path.as_str()));
        }

        debug!("Loading config from {}", path);
        let config = Self::merge(Self::load_defaults()?, Self::read_overlay(path)?);
        Self::apply_env_overrides(config)
    }

    /// Embedded defaults only
    pub fn load_defaults() -> Result<SyncConfig> {
        let embedded = EmbeddedConfigs::get(DEFAULTS_FILE).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", DEFAULTS_FILE))
        })?;

        let content = std::str::from_utf8(&embedded.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", DEFAULTS_FILE))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                DEFAULTS_FILE, e
            ))
        })
    }

    fn read_overlay(path: &Utf8Path) -> Result<ConfigOverlay> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(ConfigOverlay::default());
        }

        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// Overlay flags replace base flags individually; overlay markets replace by name
    fn merge(mut base: SyncConfig, overlay: ConfigOverlay) -> SyncConfig {
        let policy = overlay.policy;
        if let Some(v) = policy.install_missing {
            base.policy.install_missing = v;
        }
        if let Some(v) = policy.sync_removals {
            base.policy.sync_removals = v;
        }
        if let Some(v) = policy.sync_disabled {
            base.policy.sync_disabled = v;
        }
        if let Some(v) = policy.force {
            base.policy.force = v;
        }

        base.markets.extend(overlay.markets);
        base
    }

    fn apply_env_overrides(mut config: SyncConfig) -> Result<SyncConfig> {
        if let Some(v) = env_flag("EXTSYNC_INSTALL_MISSING")? {
            config.policy.install_missing = v;
        }
        if let Some(v) = env_flag("EXTSYNC_SYNC_REMOVALS")? {
            config.policy.sync_removals = v;
        }
        if let Some(v) = env_flag("EXTSYNC_SYNC_DISABLED")? {
            config.policy.sync_disabled = v;
        }
        if let Some(v) = env_flag("EXTSYNC_FORCE")? {
            config.policy.force = v;
        }
        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

fn env_flag(name: &str) -> Result<Option<bool>> {
    match env::var(name) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::invalid_config(format!("{} must be true or false", name))),
        Err(_) => Ok(None),
    }
}
