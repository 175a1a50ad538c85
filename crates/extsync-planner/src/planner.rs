//! Reconciliation planner
//!
//! A single pure pass: desired entries are planned in input order, then
//! removals follow in installed order. The same inputs always produce the
//! same action list.

use extsync_core::{
    is_newer, DesiredRecord, EffectivePolicy, Error, InstallAction, InstalledRecord, PolicyConfig,
    Result,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Outcome of a lenient planning pass
#[derive(Debug, Default)]
pub struct PlanReport {
    /// Actions for every extension that planned cleanly
    pub actions: Vec<InstallAction>,

    /// Extensions left out because their versions could not be compared
    pub skipped: Vec<SkippedExtension>,
}

/// An extension excluded from a lenient pass
#[derive(Debug)]
pub struct SkippedExtension {
    pub id: String,
    pub error: Error,
}

/// Plan the actions converging `installed` toward `desired`
///
/// Fails on the first malformed version met during an update check.
pub fn plan(
    installed: &[InstalledRecord],
    desired: &[DesiredRecord],
    policy: &PolicyConfig,
) -> Result<Vec<InstallAction>> {
    let pass = Pass::new(installed, desired, policy);

    let mut actions = Vec::new();
    for entry in desired {
        actions.extend(pass.plan_entry(entry)?);
    }
    actions.extend(pass.removals());

    info!(
        "Planned {} action(s) for {} desired / {} installed extension(s)",
        actions.len(),
        desired.len(),
        installed.len()
    );
    Ok(actions)
}

/// Plan like [`plan`], but exclude extensions whose versions are malformed
///
/// An excluded extension gets no actions at all and is reported in
/// [`PlanReport::skipped`]. It still counts as desired, so it is never
/// uninstalled because of the failure.
pub fn plan_lenient(
    installed: &[InstalledRecord],
    desired: &[DesiredRecord],
    policy: &PolicyConfig,
) -> PlanReport {
    let pass = Pass::new(installed, desired, policy);
    let mut report = PlanReport::default();

    for entry in desired {
        match pass.plan_entry(entry) {
            Ok(actions) => report.actions.extend(actions),
            Err(error) => {
                warn!("Skipping {}: {}", entry.extension_id, error);
                report.skipped.push(SkippedExtension {
                    id: entry.extension_id.clone(),
                    error,
                });
            }
        }
    }
    report.actions.extend(pass.removals());

    info!(
        "Planned {} action(s), skipped {} extension(s)",
        report.actions.len(),
        report.skipped.len()
    );
    report
}

/// Lookups for one planning pass
struct Pass<'a> {
    installed: &'a [InstalledRecord],
    installed_by_id: HashMap<&'a str, &'a InstalledRecord>,
    desired_ids: HashSet<&'a str>,
    policy: EffectivePolicy,
}

impl<'a> Pass<'a> {
    fn new(
        installed: &'a [InstalledRecord],
        desired: &'a [DesiredRecord],
        policy: &PolicyConfig,
    ) -> Self {
        Self {
            installed,
            installed_by_id: installed.iter().map(|r| (r.id.as_str(), r)).collect(),
            desired_ids: desired.iter().map(|r| r.extension_id.as_str()).collect(),
            policy: policy.effective(),
        }
    }

    /// Actions for a single desired entry, in emission order
    fn plan_entry(&self, entry: &DesiredRecord) -> Result<Vec<InstallAction>> {
        let id = &entry.extension_id;
        let mut actions = Vec::new();

        match self.installed_by_id.get(id.as_str()) {
            None => {
                if !self.policy.install_missing {
                    debug!("{} missing on target, install not enabled", id);
                    return Ok(actions);
                }
                actions.push(InstallAction::Install {
                    id: id.clone(),
                    version: entry.version.clone(),
                    artifact_ref: entry.artifact_ref.clone(),
                });
                if self.policy.sync_disabled && entry.source_disabled {
                    actions.push(InstallAction::Disable { id: id.clone() });
                }
            }
            Some(current) => {
                if is_newer(&entry.version, &current.version)? {
                    actions.push(InstallAction::Update {
                        id: id.clone(),
                        version: entry.version.clone(),
                        artifact_ref: entry.artifact_ref.clone(),
                        current_version: current.version.clone(),
                    });
                }
                if self.policy.sync_disabled {
                    if entry.source_disabled && !current.disabled {
                        actions.push(InstallAction::Disable { id: id.clone() });
                    } else if !entry.source_disabled && current.disabled {
                        actions.push(InstallAction::Enable { id: id.clone() });
                    }
                }
            }
        }

        for action in &actions {
            debug!("{}", action);
        }
        Ok(actions)
    }

    /// Uninstalls for installed extensions absent from the desired snapshot
    fn removals(&self) -> Vec<InstallAction> {
        if !self.policy.sync_removals {
            return Vec::new();
        }

        self.installed
            .iter()
            .filter(|r| !self.desired_ids.contains(r.id.as_str()))
            .map(|r| {
                debug!("Uninstall {}", r.id);
                InstallAction::Uninstall { id: r.id.clone() }
            })
            .collect()
    }
}
