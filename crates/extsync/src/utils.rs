//! Snapshot file loading

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::de::DeserializeOwned;
use std::fs;

/// Load a list of records from a JSON or YAML file
///
/// Files ending in `.yaml` or `.yml` are read as YAML, anything else as JSON.
pub fn load_records<T: DeserializeOwned>(path: &Utf8Path) -> Result<Vec<T>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;

    match path.extension() {
        Some("yaml") | Some("yml") => {
            serde_yaml_ng::from_str(&content).with_context(|| format!("Failed to parse {}", path))
        }
        _ => serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use extsync_core::{DesiredRecord, InstalledRecord};
    use tempfile::TempDir;

    fn temp_file(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("Invalid UTF-8 path");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_json_records() {
        let dir = TempDir::new().unwrap();
        let path = temp_file(
            &dir,
            "installed.json",
            r#"[{"id": "a.b", "version": "1.0.0", "disabled": true}]"#,
        );

        let records: Vec<InstalledRecord> = load_records(&path).unwrap();
        assert_eq!(records, vec![InstalledRecord::new("a.b", "1.0.0", true)]);
    }

    #[test]
    fn test_load_yaml_records() {
        let dir = TempDir::new().unwrap();
        let path = temp_file(
            &dir,
            "desired.yml",
            "- extensionId: a.b\n  version: 2.0.0\n  artifactRef: vsix/a.b-2.0.0.vsix\n",
        );

        let records: Vec<DesiredRecord> = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].version, "2.0.0");
        assert!(!records[0].source_disabled);
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("nope.json")).unwrap();

        let err = load_records::<InstalledRecord>(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
