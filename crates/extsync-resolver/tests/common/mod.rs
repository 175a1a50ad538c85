//! Common test infrastructure for extsync-resolver tests
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

pub mod builders;

pub use builders::*;

/// Engine version of the cursor market in the embedded defaults
pub const CURSOR_ENGINE: &str = "1.99.3";

/// Engine version of the agy market in the embedded defaults
pub const AGY_ENGINE: &str = "1.104.0";
