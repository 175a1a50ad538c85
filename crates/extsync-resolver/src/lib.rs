//! Engine-compatible release selection
//!
//! Provides:
//! - Picking the newest release whose declared engine range accepts an engine version
//! - Resolving one release list against every configured market
//! - Converting marketplace gallery metadata into release candidates

pub mod compatibility;
pub mod gallery;

pub use compatibility::{resolve_compatible, CompatibilityResolver, MarketResolution};
pub use gallery::{
    GalleryExtension, GalleryFile, GalleryProperty, GalleryPublisher, GalleryVersion,
};
