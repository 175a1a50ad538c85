//! Configuration types and loading

mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::PolicyConfig;

/// Complete sync configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Reconciliation policy
    #[serde(default)]
    pub policy: PolicyConfig,

    /// Marketplaces keyed by name, one per editor fork
    #[serde(default)]
    pub markets: BTreeMap<String, MarketConfig>,
}

/// A marketplace served for one editor fork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Engine version the fork declares
    pub engine: String,

    /// VSIX directory handed to code-marketplace
    pub directory: String,

    /// Listen port for code-marketplace
    #[serde(default)]
    pub port: Option<u16>,
}

impl MarketConfig {
    /// Suggested `code-marketplace` invocation for this market
    pub fn serve_command(&self) -> Option<String> {
        self.port.map(|port| {
            format!(
                "code-marketplace --directory {} --listen 127.0.0.1:{}",
                self.directory, port
            )
        })
    }
}

impl SyncConfig {
    /// Look up a market by name
    pub fn market(&self, name: &str) -> Result<&MarketConfig> {
        self.markets
            .get(name)
            .ok_or_else(|| Error::unknown_market(name))
    }

    /// Markets selected by name, or all of them when `selected` is empty
    ///
    /// The pseudo-market `all` selects every configured market.
    pub fn select_markets(&self, selected: &[String]) -> Result<Vec<(&str, &MarketConfig)>> {
        if selected.is_empty() || selected.iter().any(|m| m == "all") {
            return Ok(self
                .markets
                .iter()
                .map(|(name, market)| (name.as_str(), market))
                .collect());
        }

        selected
            .iter()
            .map(|name| {
                self.markets
                    .get_key_value(name.as_str())
                    .map(|(key, market)| (key.as_str(), market))
                    .ok_or_else(|| Error::unknown_market(name.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> SyncConfig {
        let mut markets = BTreeMap::new();
        markets.insert(
            "cursor".to_string(),
            MarketConfig {
                engine: "1.99.3".to_string(),
                directory: "vsix-cursor".to_string(),
                port: Some(8080),
            },
        );
        markets.insert(
            "local".to_string(),
            MarketConfig {
                engine: "1.90.0".to_string(),
                directory: "vsix-local".to_string(),
                port: None,
            },
        );
        SyncConfig {
            policy: PolicyConfig::default(),
            markets,
        }
    }

    #[test]
    fn test_serve_command() {
        let config = sample_config();
        assert_eq!(
            config.market("cursor").unwrap().serve_command().unwrap(),
            "code-marketplace --directory vsix-cursor --listen 127.0.0.1:8080"
        );
        assert!(config.market("local").unwrap().serve_command().is_none());
    }

    #[test]
    fn test_select_markets() {
        let config = sample_config();

        assert_eq!(config.select_markets(&[]).unwrap().len(), 2);
        assert_eq!(config.select_markets(&["all".to_string()]).unwrap().len(), 2);

        let one = config.select_markets(&["local".to_string()]).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].0, "local");
    }

    #[test]
    fn test_selected_names_outlive_request() {
        let config = sample_config();
        let selected = {
            let request = vec!["cursor".to_string()];
            config.select_markets(&request).unwrap()
        };
        assert_eq!(selected[0].0, "cursor");
        assert_eq!(selected[0].1.engine, "1.99.3");
    }

    #[test]
    fn test_select_unknown_market() {
        let config = sample_config();
        let err = config.select_markets(&["vscodium".to_string()]).unwrap_err();
        assert!(matches!(err, Error::UnknownMarket { .. }));
    }
}
