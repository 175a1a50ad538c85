//! Plan command

use anyhow::{Context, Result};
use extsync_core::snapshot::{canonicalize_desired, canonicalize_installed};
use camino::Utf8Path;
use extsync_core::{DesiredRecord, InstalledRecord, PolicyConfig};
use extsync_planner::{plan, plan_lenient, InstallAction};

use super::load_config;
use crate::cli::PlanArgs;
use crate::output;
use crate::utils::load_records;

/// Print the actions converging the installed snapshot toward the desired one
pub fn run(args: PlanArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let installed: Vec<InstalledRecord> = load_records(&args.installed)?;
    let desired: Vec<DesiredRecord> = load_records(&args.desired)?;
    let installed = canonicalize_installed(installed);
    let desired = canonicalize_desired(desired);

    // flags can only switch policies on
    let config = load_config(config_path)?;
    let policy = config.policy.union(PolicyConfig {
        install_missing: args.install_missing,
        sync_removals: args.sync_removals,
        sync_disabled: args.sync_disabled,
        force: args.force,
    });

    let actions = if args.strict {
        plan(&installed, &desired, &policy).context("Planning failed")?
    } else {
        let report = plan_lenient(&installed, &desired, &policy);
        for skipped in &report.skipped {
            output::warning(&format!("Skipped {}: {}", skipped.id, skipped.error));
        }
        report.actions
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
        return Ok(());
    }

    print_plan(&actions);
    Ok(())
}

fn print_plan(actions: &[InstallAction]) {
    if actions.is_empty() {
        output::success("Target is already in sync");
        return;
    }

    output::header(&format!("Plan ({} actions)", actions.len()));
    for action in actions {
        println!("  {}", action);
    }
}
