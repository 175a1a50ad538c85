//! Type definitions for extsync

pub mod action;
pub mod policy;
pub mod records;

pub use action::*;
pub use policy::*;
pub use records::*;
