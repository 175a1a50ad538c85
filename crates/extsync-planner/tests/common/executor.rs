//! In-memory executor for replanning tests

use extsync_core::{InstallAction, InstalledRecord};

/// Apply actions to an installed snapshot the way a successful executor would
pub fn apply_actions(installed: &[InstalledRecord], actions: &[InstallAction]) -> Vec<InstalledRecord> {
    let mut state = installed.to_vec();

    for action in actions {
        match action {
            InstallAction::Install { id, version, .. } => {
                state.push(InstalledRecord::new(id.clone(), version.clone(), false));
            }
            InstallAction::Update { id, version, .. } => {
                if let Some(record) = state.iter_mut().find(|r| &r.id == id) {
                    record.version = version.clone();
                }
            }
            InstallAction::Uninstall { id } => state.retain(|r| &r.id != id),
            InstallAction::Disable { id } => set_disabled(&mut state, id, true),
            InstallAction::Enable { id } => set_disabled(&mut state, id, false),
        }
    }

    state
}

fn set_disabled(state: &mut [InstalledRecord], id: &str, disabled: bool) {
    if let Some(record) = state.iter_mut().find(|r| r.id == id) {
        record.disabled = disabled;
    }
}
