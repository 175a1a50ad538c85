//! Common test infrastructure for extsync-planner tests
//!
//! - `builders`: record and policy construction
//! - `executor`: in-memory application of planned actions
//! - `assertions`: ordering checks over action lists

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod executor;

pub use assertions::*;
pub use builders::*;
pub use executor::*;
