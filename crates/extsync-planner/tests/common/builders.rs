//! Builder helpers for snapshot records and policies

use extsync_core::{DesiredRecord, InstalledRecord, PolicyConfig};

/// Enabled installed record
pub fn installed(id: &str, version: &str) -> InstalledRecord {
    InstalledRecord::new(id, version, false)
}

/// Disabled installed record
pub fn installed_disabled(id: &str, version: &str) -> InstalledRecord {
    InstalledRecord::new(id, version, true)
}

/// Desired record enabled at the source, with a derived artifact ref
pub fn desired(id: &str, version: &str) -> DesiredRecord {
    DesiredRecord::new(id, version, artifact_ref(id, version), false)
}

/// Desired record disabled at the source
pub fn desired_disabled(id: &str, version: &str) -> DesiredRecord {
    DesiredRecord::new(id, version, artifact_ref(id, version), true)
}

/// Artifact ref used by the desired builders
pub fn artifact_ref(id: &str, version: &str) -> String {
    format!("vsix/{}-{}.vsix", id, version)
}

/// Fluent builder for policy flags, all off by default
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyBuilder {
    policy: PolicyConfig,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install_missing(mut self) -> Self {
        self.policy.install_missing = true;
        self
    }

    pub fn sync_removals(mut self) -> Self {
        self.policy.sync_removals = true;
        self
    }

    pub fn sync_disabled(mut self) -> Self {
        self.policy.sync_disabled = true;
        self
    }

    pub fn force(mut self) -> Self {
        self.policy.force = true;
        self
    }

    pub fn build(self) -> PolicyConfig {
        self.policy
    }
}
