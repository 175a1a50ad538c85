//! Error types for extsync-core

use thiserror::Error;

/// Result type alias using extsync-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for extsync
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed version string
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// Malformed compatibility range
    #[error("Invalid version range '{range}': {reason}")]
    InvalidRange { range: String, reason: String },

    /// Market name not present in the configuration
    #[error("Unknown market: {market}")]
    UnknownMarket { market: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(range: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            range: range.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown market error
    pub fn unknown_market(market: impl Into<String>) -> Self {
        Self::UnknownMarket {
            market: market.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this is a value-level version or range error
    pub fn is_version_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidVersion { .. } | Self::InvalidRange { .. }
        )
    }
}
