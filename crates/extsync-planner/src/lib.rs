//! State reconciliation planning
//!
//! Diffs an installed snapshot against a desired snapshot under a policy
//! and returns the ordered list of actions that converges the target.
//! Executing the actions is the caller's job.

pub mod planner;

pub use extsync_core::InstallAction;
pub use planner::{plan, plan_lenient, PlanReport, SkippedExtension};
