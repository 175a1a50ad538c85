//! # extsync-core
//!
//! Core library for extsync providing:
//! - Version parsing, ordering and compatibility-range matching
//! - Snapshot record types and the action vocabulary
//! - Policy derivation (`force` overriding the other flags)
//! - Snapshot canonicalisation for callers
//! - Hierarchical configuration loading (embedded defaults, file, environment)

pub mod config;
pub mod error;
pub mod snapshot;
pub mod types;
pub mod utils;
pub mod version;

pub use config::{ConfigLoader, MarketConfig, SyncConfig};
pub use error::{Error, Result};
pub use types::{
    DesiredRecord, EffectivePolicy, InstallAction, InstalledRecord, PolicyConfig,
    VersionCandidate,
};
pub use version::{compare, is_newer, satisfies_range, Version, VersionRange};
