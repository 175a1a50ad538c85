//! Engine compatibility resolution

use extsync_core::{Result, SyncConfig, Version, VersionCandidate, VersionRange};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Selected release per market, `None` where no release fits the engine
pub type MarketResolution = BTreeMap<String, Option<VersionCandidate>>;

/// Pick the newest candidate whose engine range accepts `engine_version`
///
/// Returns `Ok(None)` when nothing is compatible, including for an empty
/// candidate list. Identical versions resolve to the first in input order.
/// A malformed engine version, candidate range, or satisfying candidate
/// version is an error.
pub fn resolve_compatible<'a>(
    candidates: &'a [VersionCandidate],
    engine_version: &str,
) -> Result<Option<&'a VersionCandidate>> {
    let engine = Version::parse(engine_version)?;
    select(candidates, &engine)
}

fn select<'a>(
    candidates: &'a [VersionCandidate],
    engine: &Version,
) -> Result<Option<&'a VersionCandidate>> {
    let mut best: Option<(&VersionCandidate, Version)> = None;

    for candidate in candidates {
        let range = VersionRange::parse(&candidate.engine_range)?;
        if !range.matches(engine) {
            trace!(
                "{} requires engine {}, skipping for {}",
                candidate.version,
                range,
                engine
            );
            continue;
        }

        let version = Version::parse(&candidate.version)?;
        let newer = match &best {
            Some((_, current)) => version > *current,
            None => true,
        };
        if newer {
            if version.is_prerelease() {
                trace!("{} is a pre-release accepted by {}", version, range);
            }
            best = Some((candidate, version));
        }
    }

    Ok(best.map(|(candidate, _)| candidate))
}

/// Resolves releases against a fixed set of named engine versions
#[derive(Debug, Clone)]
pub struct CompatibilityResolver {
    engines: BTreeMap<String, Version>,
}

impl CompatibilityResolver {
    /// Create a resolver from `(market, engine version)` pairs
    pub fn new<I, K, V>(engines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let engines = engines
            .into_iter()
            .map(|(market, engine)| Ok((market.into(), Version::parse(engine.as_ref())?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self { engines })
    }

    /// Create a resolver for the selected markets of a configuration
    ///
    /// An empty selection (or `all`) uses every configured market.
    pub fn from_config(config: &SyncConfig, selected: &[String]) -> Result<Self> {
        let markets = config.select_markets(selected)?;
        Self::new(
            markets
                .into_iter()
                .map(|(name, market)| (name, market.engine.as_str())),
        )
    }

    /// Market names and their engine versions
    pub fn engines(&self) -> impl Iterator<Item = (&str, &Version)> {
        self.engines.iter().map(|(name, v)| (name.as_str(), v))
    }

    /// Resolve one extension's releases against every market
    pub fn resolve(
        &self,
        extension_id: &str,
        candidates: &[VersionCandidate],
    ) -> Result<MarketResolution> {
        let mut resolution = MarketResolution::new();

        for (market, engine) in &self.engines {
            let selected = select(candidates, engine)?;
            match selected {
                Some(candidate) => debug!(
                    "{}: {} selected for engine {} in market '{}'",
                    extension_id, candidate.version, engine, market
                ),
                None => warn!(
                    "{}: no compatible version for engine {} in market '{}'",
                    extension_id, engine, market
                ),
            }
            resolution.insert(market.clone(), selected.cloned());
        }

        Ok(resolution)
    }
}
