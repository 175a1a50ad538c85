//! Assertion helpers for action lists

use extsync_core::InstallAction;
use std::collections::HashMap;

/// Described form of an action list, for readable comparisons
pub fn described(actions: &[InstallAction]) -> Vec<String> {
    actions.iter().map(InstallAction::describe).collect()
}

/// Assert every uninstall comes after every other action
pub fn assert_removals_last(actions: &[InstallAction]) {
    let first_removal = actions
        .iter()
        .position(|a| matches!(a, InstallAction::Uninstall { .. }))
        .unwrap_or(actions.len());

    assert!(
        actions[first_removal..]
            .iter()
            .all(|a| matches!(a, InstallAction::Uninstall { .. })),
        "Expected uninstalls last, got {:?}",
        described(actions)
    );
}

/// Assert at most one install, update or uninstall per id
pub fn assert_single_artifact_change(actions: &[InstallAction]) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for action in actions.iter().filter(|a| a.changes_artifact()) {
        *counts.entry(action.id()).or_default() += 1;
    }

    assert!(
        counts.values().all(|n| *n <= 1),
        "Expected one artifact change per id, got {:?}",
        described(actions)
    );
}

/// Assert a Disable following an Install for the same id comes right after it
pub fn assert_install_precedes_disable(actions: &[InstallAction]) {
    for (i, action) in actions.iter().enumerate() {
        if let InstallAction::Install { id, .. } = action {
            if let Some(j) = actions
                .iter()
                .position(|a| matches!(a, InstallAction::Disable { id: d } if d == id))
            {
                assert_eq!(
                    j,
                    i + 1,
                    "Expected Disable {} right after its Install, got {:?}",
                    id,
                    described(actions)
                );
            }
        }
    }
}
