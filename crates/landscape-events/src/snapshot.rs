//! Snapshot Types
//!
//! Serialization structs for landscape snapshots.
//!
//! A snapshot captures the representative set, the network and every agent's
//! view of its own holdings at a given step, for analysis and debugging.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID with the given step number.
pub fn generate_snapshot_id(step: u64) -> String {
    format!("snap_{:06}", step)
}

/// One calibrated anchor of the representative set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeSnapshot {
    pub idea: String,
    pub utility: f64,
}

/// Network summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub node_count: usize,
    pub edge_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<(usize, usize)>,
}

/// A single held idea as seen through the three utility layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingSnapshot {
    pub idea: String,
    pub true_utility: f64,
    pub master_utility: f64,
    pub perceived_utility: f64,
}

/// Agent snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub index: usize,
    pub node: usize,
    pub heterogeneity: f64,
    #[serde(default)]
    pub holdings: Vec<HoldingSnapshot>,
}

impl AgentSnapshot {
    /// Mean perceived utility over this agent's holdings, if it holds anything.
    pub fn mean_perceived_utility(&self) -> Option<f64> {
        if self.holdings.is_empty() {
            return None;
        }
        let total: f64 = self.holdings.iter().map(|h| h.perceived_utility).sum();
        Some(total / self.holdings.len() as f64)
    }
}

/// Aggregate perception statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerceptionMetrics {
    /// Mean |perceived - true| across every held idea
    pub mean_absolute_error: f64,
    /// Mean (master - true) across every held idea
    pub mean_group_bias: f64,
    /// Spread (max - min) of per-agent mean perceived utility
    pub perceived_spread: f64,
}

/// Complete landscape snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandscapeSnapshot {
    pub snapshot_id: String,
    pub step: u64,
    pub seed: u64,
    pub dimension: u8,
    pub problem_space_size: usize,
    pub beta: f64,
    pub representatives: Vec<RepresentativeSnapshot>,
    pub network: NetworkSnapshot,
    pub agents: Vec<AgentSnapshot>,
    #[serde(default)]
    pub metrics: PerceptionMetrics,
}

impl LandscapeSnapshot {
    /// Serializes the snapshot to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the snapshot to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Representative entry whose utility is exactly `value`, if any.
    pub fn anchor_at(&self, value: f64) -> Option<&RepresentativeSnapshot> {
        self.representatives.iter().find(|r| r.utility == value)
    }
}
