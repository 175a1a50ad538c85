//! State-changing actions emitted by the planner

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single action for the executor to carry out on the target host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum InstallAction {
    /// Install an extension missing from the target
    Install {
        id: String,
        version: String,
        artifact_ref: String,
    },

    /// Reinstall in place at a newer version
    Update {
        id: String,
        version: String,
        artifact_ref: String,
        current_version: String,
    },

    /// Remove an extension absent from the desired snapshot
    Uninstall { id: String },

    /// Disable an installed extension
    Disable { id: String },

    /// Enable an installed extension
    Enable { id: String },
}

impl InstallAction {
    /// Extension id the action applies to
    pub fn id(&self) -> &str {
        match self {
            Self::Install { id, .. }
            | Self::Update { id, .. }
            | Self::Uninstall { id }
            | Self::Disable { id }
            | Self::Enable { id } => id,
        }
    }

    /// Whether the action replaces or removes the installed artifact
    pub fn changes_artifact(&self) -> bool {
        matches!(
            self,
            Self::Install { .. } | Self::Update { .. } | Self::Uninstall { .. }
        )
    }

    /// Human-readable one-line description
    pub fn describe(&self) -> String {
        match self {
            Self::Install { id, version, .. } => format!("Install {}@{}", id, version),
            Self::Update {
                id,
                version,
                current_version,
                ..
            } => format!("Update {}: {} → {}", id, current_version, version),
            Self::Uninstall { id } => format!("Uninstall {}", id),
            Self::Disable { id } => format!("Disable {}", id),
            Self::Enable { id } => format!("Enable {}", id),
        }
    }
}

impl fmt::Display for InstallAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
