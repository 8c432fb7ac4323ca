//! Agent Initialization
//!
//! Gives every agent its private starting ideas and heterogeneity coefficient,
//! and places it on the network node with the same index.

use rand::Rng;

use crate::components::agent::AgentState;
use crate::components::landscape::ProblemSpace;
use crate::components::network::Network;
use crate::error::{LandscapeError, Result};
use crate::systems::utility::validate_heterogeneity;

/// Create `agent_count` agents.
///
/// For each agent, in order: `ideas_per_agent` ideas drawn uniformly with
/// replacement, then `xi = U(-1, 1) * heterogeneity_scale`. The network size and
/// the scale are checked before any draw.
pub fn init_agents<R: Rng + ?Sized>(
    agent_count: usize,
    ideas_per_agent: usize,
    heterogeneity_scale: f64,
    problem_space: &ProblemSpace,
    network: &Network,
    rng: &mut R,
) -> Result<Vec<AgentState>> {
    if network.node_count() != agent_count {
        return Err(LandscapeError::NetworkSizeMismatch {
            agents: agent_count,
            nodes: network.node_count(),
        });
    }
    validate_heterogeneity(heterogeneity_scale)?;

    let ideas = problem_space.ideas();
    let mut agents = Vec::with_capacity(agent_count);

    for index in 0..agent_count {
        let holdings = (0..ideas_per_agent)
            .map(|_| ideas[rng.gen_range(0..ideas.len())])
            .collect();
        let heterogeneity = rng.gen_range(-1.0..1.0) * heterogeneity_scale;

        agents.push(AgentState {
            index,
            holdings,
            heterogeneity,
            node: index,
        });
    }

    tracing::debug!(agent_count, ideas_per_agent, "initialized agents");
    Ok(agents)
}
