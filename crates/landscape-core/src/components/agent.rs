//! Agent Components
//!
//! The plain agent record handed to callers, and the ECS components an agent
//! entity carries inside a running simulation.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::idea::Idea;

/// Marker component identifying an entity as an agent
#[derive(Component, Debug, Clone, Default)]
pub struct Agent;

/// Position of the agent in the initial ordering
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentIndex(pub usize);

/// Ideas the agent currently knows; repeats allowed
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Holdings(pub Vec<Idea>);

/// Idiosyncratic optimism (positive) or pessimism (negative)
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heterogeneity(pub f64);

/// Network node hosting the agent
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkNode(pub usize);

/// Per-agent state produced at initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub index: usize,
    /// Initially known ideas, drawn with replacement
    pub holdings: Vec<Idea>,
    /// Heterogeneity coefficient xi
    pub heterogeneity: f64,
    /// Network placement
    pub node: usize,
}

impl AgentState {
    /// Component bundle for spawning this agent as an entity
    pub fn into_bundle(self) -> (Agent, AgentIndex, Holdings, Heterogeneity, NetworkNode) {
        (
            Agent,
            AgentIndex(self.index),
            Holdings(self.holdings),
            Heterogeneity(self.heterogeneity),
            NetworkNode(self.node),
        )
    }
}
