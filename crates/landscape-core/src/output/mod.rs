//! Output Module
//!
//! Landscape snapshots for analysis. Informational only.

pub mod snapshot;

pub use snapshot::*;
