//! Resolve command

use anyhow::{Context, Result};
use camino::Utf8Path;
use extsync_core::VersionCandidate;
use extsync_resolver::{
    resolve_compatible, CompatibilityResolver, GalleryExtension, MarketResolution,
};
use std::fs;

use super::load_config;
use crate::cli::ResolveArgs;
use crate::output;
use crate::utils::load_records;

/// Print the newest compatible release per engine or market
pub fn run(args: ResolveArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let (label, candidates) = load_candidates(&args)?;

    let resolution = match &args.engine {
        Some(engine) => {
            let picked = resolve_compatible(&candidates, engine)
                .with_context(|| format!("Failed to resolve {} for engine {}", label, engine))?;
            MarketResolution::from([(engine.clone(), picked.cloned())])
        }
        None => CompatibilityResolver::from_config(&load_config(config_path)?, &args.market)
            .context("Invalid market selection")?
            .resolve(&label, &candidates)
            .with_context(|| format!("Failed to resolve {}", label))?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    output::header(&format!("{} ({} releases)", label, candidates.len()));
    for (target, picked) in &resolution {
        match picked {
            Some(candidate) => output::kv(
                target,
                &format!("{} ({})", candidate.version, candidate.artifact_ref),
            ),
            None => output::warning(&format!("{}: no compatible version", target)),
        }
    }
    Ok(())
}

fn load_candidates(args: &ResolveArgs) -> Result<(String, Vec<VersionCandidate>)> {
    if let Some(path) = &args.gallery {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let gallery = GalleryExtension::from_json(&content)
            .with_context(|| format!("Failed to parse {}", path))?;

        let label = args
            .id
            .clone()
            .or_else(|| gallery.extension_id())
            .unwrap_or_else(|| path.to_string());
        return Ok((label, gallery.candidates()));
    }

    let path = args
        .candidates
        .as_ref()
        .context("Either --gallery or --candidates is required")?;
    let label = args.id.clone().unwrap_or_else(|| path.to_string());
    Ok((label, load_records(path)?))
}
