//! Shared snapshot types and serialization for the idea landscape model.
//!
//! This crate contains pure data structures with no model logic.
//! Ideas are carried in their textual form (e.g. `"0101"`).

pub mod snapshot;

pub use snapshot::{
    generate_snapshot_id, AgentSnapshot, HoldingSnapshot, LandscapeSnapshot, NetworkSnapshot,
    PerceptionMetrics, RepresentativeSnapshot,
};
