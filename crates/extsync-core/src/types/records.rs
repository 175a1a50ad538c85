//! Snapshot records exchanged with the surrounding system
//!
//! Field names serialize in camelCase to match the collaborators that
//! produce installed and desired snapshots.

use serde::{Deserialize, Serialize};

/// Extension state observed on a target host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledRecord {
    /// Canonical `publisher.name` identifier
    pub id: String,

    /// Installed version string
    pub version: String,

    /// Whether the extension is disabled on the target
    #[serde(default)]
    pub disabled: bool,
}

impl InstalledRecord {
    pub fn new(id: impl Into<String>, version: impl Into<String>, disabled: bool) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            disabled,
        }
    }
}

/// Extension state to converge toward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredRecord {
    /// Canonical `publisher.name` identifier
    pub extension_id: String,

    /// Desired version string
    pub version: String,

    /// Opaque artifact location, passed through untouched
    pub artifact_ref: String,

    /// Disabled state on the source host at capture time
    #[serde(default)]
    pub source_disabled: bool,
}

impl DesiredRecord {
    pub fn new(
        extension_id: impl Into<String>,
        version: impl Into<String>,
        artifact_ref: impl Into<String>,
        source_disabled: bool,
    ) -> Self {
        Self {
            extension_id: extension_id.into(),
            version: version.into(),
            artifact_ref: artifact_ref.into(),
            source_disabled,
        }
    }

    /// Build a desired record from the release picked by the resolver
    pub fn from_candidate(
        extension_id: impl Into<String>,
        candidate: &VersionCandidate,
        source_disabled: bool,
    ) -> Self {
        Self::new(
            extension_id,
            candidate.version.clone(),
            candidate.artifact_ref.clone(),
            source_disabled,
        )
    }
}

/// A published release and the engine range it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionCandidate {
    pub version: String,
    pub engine_range: String,
    pub artifact_ref: String,
}

impl VersionCandidate {
    pub fn new(
        version: impl Into<String>,
        engine_range: impl Into<String>,
        artifact_ref: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            engine_range: engine_range.into(),
            artifact_ref: artifact_ref.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desired_record_deserialization() {
        let json = r#"{
            "extensionId": "ms-python.python",
            "version": "2024.2.1",
            "artifactRef": "vsix/ms-python.python-2024.2.1.vsix",
            "sourceDisabled": true
        }"#;

        let record: DesiredRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extension_id, "ms-python.python");
        assert_eq!(record.artifact_ref, "vsix/ms-python.python-2024.2.1.vsix");
        assert!(record.source_disabled);
    }

    #[test]
    fn test_installed_record_disabled_defaults_false() {
        let record: InstalledRecord =
            serde_json::from_str(r#"{"id": "a.b", "version": "1.0.0"}"#).unwrap();
        assert!(!record.disabled);
    }

    #[test]
    fn test_desired_from_candidate() {
        let candidate = VersionCandidate::new("1.2.0", "^1.80.0", "https://example.test/a.vsix");
        let desired = DesiredRecord::from_candidate("pub.ext", &candidate, false);

        assert_eq!(desired.version, "1.2.0");
        assert_eq!(desired.artifact_ref, "https://example.test/a.vsix");
        assert!(!desired.source_disabled);
    }

    #[test]
    fn test_candidate_serializes_camel_case() {
        let candidate = VersionCandidate::new("1.0.0", "*", "ref");
        let value = serde_json::to_value(&candidate).unwrap();
        assert_eq!(value["engineRange"], "*");
        assert_eq!(value["artifactRef"], "ref");
    }
}
