//! Snapshot canonicalisation for callers
//!
//! The planner assumes ids are canonical and unique within a snapshot.
//! These helpers bring raw collaborator output into that shape.

use std::collections::HashSet;
use tracing::warn;

use crate::types::{DesiredRecord, InstalledRecord};

/// Canonical form of an extension id (trimmed, lowercase)
pub fn canonical_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Canonicalise ids and drop later duplicates from an installed snapshot
pub fn canonicalize_installed(records: Vec<InstalledRecord>) -> Vec<InstalledRecord> {
    dedup_first(
        records.into_iter().map(|mut r| {
            r.id = canonical_id(&r.id);
            r
        }),
        |r| &r.id,
        "installed",
    )
}

/// Canonicalise ids and drop later duplicates from a desired snapshot
pub fn canonicalize_desired(records: Vec<DesiredRecord>) -> Vec<DesiredRecord> {
    dedup_first(
        records.into_iter().map(|mut r| {
            r.extension_id = canonical_id(&r.extension_id);
            r
        }),
        |r| &r.extension_id,
        "desired",
    )
}

fn dedup_first<T>(
    records: impl Iterator<Item = T>,
    key: impl Fn(&T) -> &String,
    snapshot: &str,
) -> Vec<T> {
    let mut seen = HashSet::new();
    records
        .filter(|record| {
            let id = key(record);
            if seen.insert(id.clone()) {
                true
            } else {
                warn!("Dropping duplicate {} record for {}", snapshot, id);
                false
            }
        })
        .collect()
}
