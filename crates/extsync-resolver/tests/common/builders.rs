//! Builder patterns for test data construction

use extsync_core::VersionCandidate;
use serde_json::{json, Value};

/// Candidate with an artifact ref derived from its version
pub fn candidate(version: &str, engine_range: &str) -> VersionCandidate {
    VersionCandidate::new(
        version,
        engine_range,
        format!("https://example.test/pub.ext-{}.vsix", version),
    )
}

/// Builder for gallery metadata JSON payloads
#[derive(Debug, Clone)]
pub struct GalleryBuilder {
    publisher: Option<String>,
    name: Option<String>,
    versions: Vec<Value>,
}

impl GalleryBuilder {
    /// Create a builder for `publisher.name`
    pub fn new(publisher: &str, name: &str) -> Self {
        Self {
            publisher: Some(publisher.to_string()),
            name: Some(name.to_string()),
            versions: Vec::new(),
        }
    }

    /// Drop the publisher block
    pub fn without_publisher(mut self) -> Self {
        self.publisher = None;
        self
    }

    /// Release with an engine range and a listed VSIX asset
    pub fn release(mut self, version: &str, engine: &str) -> Self {
        self.versions.push(json!({
            "version": version,
            "properties": [
                {"key": "Microsoft.VisualStudio.Code.ExtensionDependencies", "value": ""},
                {"key": "Microsoft.VisualStudio.Code.Engine", "value": engine}
            ],
            "files": [
                {"assetType": "Microsoft.VisualStudio.Services.Icons.Default", "source": "https://cdn.test/icon.png"},
                {"assetType": "Microsoft.VisualStudio.Services.VSIXPackage", "source": format!("https://cdn.test/{}.vsix", version)}
            ]
        }));
        self
    }

    /// Release with an engine range but no files listed
    pub fn release_without_files(mut self, version: &str, engine: &str) -> Self {
        self.versions.push(json!({
            "version": version,
            "properties": [{"key": "Microsoft.VisualStudio.Code.Engine", "value": engine}],
            "files": null
        }));
        self
    }

    /// Release without an engine property
    pub fn release_without_engine(mut self, version: &str) -> Self {
        self.versions.push(json!({
            "version": version,
            "properties": null
        }));
        self
    }

    /// Serialize to the gallery JSON shape
    pub fn to_json(&self) -> String {
        let mut root = json!({ "versions": self.versions });
        if let Some(publisher) = &self.publisher {
            root["publisher"] = json!({ "publisherName": publisher });
        }
        if let Some(name) = &self.name {
            root["extensionName"] = json!(name);
        }
        root.to_string()
    }
}
