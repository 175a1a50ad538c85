//! Marketplace gallery metadata
//!
//! Converts the extension metadata returned by a VS Code marketplace
//! query into [`VersionCandidate`]s. Fetching the metadata is the
//! caller's job; this module only reads it.

use extsync_core::snapshot::canonical_id;
use extsync_core::{Result, VersionCandidate, VersionRange};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Version property holding the declared engine range
pub const ENGINE_PROPERTY: &str = "Microsoft.VisualStudio.Code.Engine";

/// File asset type of the installable package
pub const VSIX_ASSET_TYPE: &str = "Microsoft.VisualStudio.Services.VSIXPackage";

/// Extension metadata as returned by the gallery
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryExtension {
    #[serde(default)]
    pub publisher: Option<GalleryPublisher>,

    #[serde(default)]
    pub extension_name: Option<String>,

    #[serde(default)]
    pub versions: Option<Vec<GalleryVersion>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPublisher {
    #[serde(default)]
    pub publisher_name: Option<String>,
}

/// One published release
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryVersion {
    pub version: String,

    #[serde(default)]
    pub properties: Option<Vec<GalleryProperty>>,

    #[serde(default)]
    pub files: Option<Vec<GalleryFile>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryProperty {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryFile {
    pub asset_type: String,

    #[serde(default)]
    pub source: Option<String>,
}

impl GalleryExtension {
    /// Parse gallery metadata from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    fn publisher_name(&self) -> Option<&str> {
        self.publisher
            .as_ref()
            .and_then(|p| p.publisher_name.as_deref())
            .filter(|p| !p.is_empty())
    }

    fn name(&self) -> Option<&str> {
        self.extension_name.as_deref().filter(|n| !n.is_empty())
    }

    /// Canonical `publisher.name` id, when both parts are present
    pub fn extension_id(&self) -> Option<String> {
        let publisher = self.publisher_name()?;
        let name = self.name()?;
        Some(canonical_id(&format!("{}.{}", publisher, name)))
    }

    /// Published releases, empty when the gallery lists none
    pub fn versions(&self) -> &[GalleryVersion] {
        self.versions.as_deref().unwrap_or_default()
    }

    /// Download location of a release's package
    ///
    /// Prefers the package asset listed with the release and falls back to
    /// the public marketplace download URL.
    pub fn vsix_url(&self, version: &GalleryVersion) -> Option<String> {
        if let Some(source) = version.vsix_source() {
            return Some(source.to_string());
        }

        let publisher = self.publisher_name()?;
        let name = self.name()?;
        Some(format!(
            "https://marketplace.visualstudio.com/_apis/public/gallery/publishers/{}/vsextensions/{}/{}/vspackage",
            publisher, name, version.version
        ))
    }

    /// Releases usable as resolver candidates
    ///
    /// Releases without a declared engine range, with a range that does not
    /// parse, or without any package location are left out.
    pub fn candidates(&self) -> Vec<VersionCandidate> {
        let label = self.extension_id().unwrap_or_else(|| "<unnamed>".to_string());

        self.versions()
            .iter()
            .filter_map(|release| {
                let Some(range) = release.engine_range() else {
                    debug!("{}: {} declares no engine range", label, release.version);
                    return None;
                };
                if let Err(e) = VersionRange::parse(range) {
                    warn!("{}: skipping {}: {}", label, release.version, e);
                    return None;
                }
                let Some(url) = self.vsix_url(release) else {
                    warn!("{}: no VSIX URL for {}", label, release.version);
                    return None;
                };
                Some(VersionCandidate::new(release.version.clone(), range, url))
            })
            .collect()
    }
}

impl GalleryVersion {
    /// Declared engine range
    pub fn engine_range(&self) -> Option<&str> {
        self.properties
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|p| p.key == ENGINE_PROPERTY)
            .map(|p| p.value.as_str())
    }

    fn vsix_source(&self) -> Option<&str> {
        self.files
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|f| f.asset_type == VSIX_ASSET_TYPE)
            .find_map(|f| f.source.as_deref().filter(|s| !s.is_empty()))
    }
}
