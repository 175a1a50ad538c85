//! Reconciliation policy flags

use serde::{Deserialize, Serialize};

/// Policy as configured by the user
///
/// `force` never rewrites the other flags; it only affects the
/// [`EffectivePolicy`] derived from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    #[serde(default)]
    pub install_missing: bool,

    #[serde(default)]
    pub sync_removals: bool,

    #[serde(default)]
    pub sync_disabled: bool,

    #[serde(default)]
    pub force: bool,
}

/// Flags the planner actually acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectivePolicy {
    pub install_missing: bool,
    pub sync_removals: bool,
    pub sync_disabled: bool,
}

impl PolicyConfig {
    /// Derive the effective flags, with `force` turning all of them on
    pub fn effective(&self) -> EffectivePolicy {
        EffectivePolicy {
            install_missing: self.force || self.install_missing,
            sync_removals: self.force || self.sync_removals,
            sync_disabled: self.force || self.sync_disabled,
        }
    }

    /// Union of two policies, flag by flag
    pub fn union(self, other: PolicyConfig) -> PolicyConfig {
        PolicyConfig {
            install_missing: self.install_missing || other.install_missing,
            sync_removals: self.sync_removals || other.sync_removals,
            sync_disabled: self.sync_disabled || other.sync_disabled,
            force: self.force || other.force,
        }
    }
}
