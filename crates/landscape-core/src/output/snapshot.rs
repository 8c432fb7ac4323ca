//! Snapshot Generation
//!
//! Builds a `LandscapeSnapshot` from a running simulation: the anchor set,
//! the network, and every agent's holdings seen through the three utility
//! layers.

use std::fs;
use std::path::Path;

use landscape_events::{
    generate_snapshot_id, AgentSnapshot, HoldingSnapshot, LandscapeSnapshot, NetworkSnapshot,
    PerceptionMetrics, RepresentativeSnapshot,
};
use thiserror::Error;

use crate::components::agent::AgentState;
use crate::error::LandscapeError;
use crate::systems::simulation::LandscapeSimulation;
use crate::systems::utility::{perceive, UtilityLandscape};

/// Errors while producing or writing a snapshot
#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Model(#[from] LandscapeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Capture the current state of `sim`.
///
/// Master utilities are drawn from the run's random stream, one draw set per
/// holding, agents in order. Each perceived utility reuses the master value
/// drawn for the same holding.
pub fn generate_snapshot(sim: &mut LandscapeSimulation) -> Result<LandscapeSnapshot, OutputError> {
    let agents = sim.agent_states();

    let agent_snapshots = sim.with_rng(|world, rng| {
        let landscape = world.resource::<UtilityLandscape>();
        agents
            .iter()
            .map(|agent| -> Result<AgentSnapshot, LandscapeError> {
                let holdings = agent
                    .holdings
                    .iter()
                    .map(|idea| -> Result<HoldingSnapshot, LandscapeError> {
                        let true_utility = landscape.true_utility(idea)?;
                        let master_utility = landscape.master_utility(idea, rng)?;
                        Ok(HoldingSnapshot {
                            idea: idea.to_string(),
                            true_utility,
                            master_utility,
                            perceived_utility: perceive(master_utility, agent.heterogeneity),
                        })
                    })
                    .collect::<Result<Vec<_>, LandscapeError>>()?;
                Ok(agent_snapshot(agent, holdings))
            })
            .collect::<Result<Vec<_>, LandscapeError>>()
    })?;

    let landscape = sim.landscape();
    let network = sim.network();
    let step = sim.current_step();

    let snapshot = LandscapeSnapshot {
        snapshot_id: generate_snapshot_id(step),
        step,
        seed: sim.seed(),
        dimension: sim.problem_space().dimension() as u8,
        problem_space_size: sim.problem_space().len(),
        beta: landscape.beta(),
        representatives: landscape
            .representatives()
            .iter()
            .map(|r| RepresentativeSnapshot {
                idea: r.idea.to_string(),
                utility: r.utility,
            })
            .collect(),
        network: NetworkSnapshot {
            node_count: network.node_count(),
            edge_count: network.edge_count(),
            edges: network.edges(),
        },
        metrics: compute_metrics(&agent_snapshots),
        agents: agent_snapshots,
    };

    tracing::debug!(snapshot_id = %snapshot.snapshot_id, "generated snapshot");
    Ok(snapshot)
}

fn agent_snapshot(agent: &AgentState, holdings: Vec<HoldingSnapshot>) -> AgentSnapshot {
    AgentSnapshot {
        index: agent.index,
        node: agent.node,
        heterogeneity: agent.heterogeneity,
        holdings,
    }
}

/// Aggregate error and disagreement statistics over all holdings.
pub fn compute_metrics(agents: &[AgentSnapshot]) -> PerceptionMetrics {
    let holdings: Vec<&HoldingSnapshot> = agents.iter().flat_map(|a| a.holdings.iter()).collect();
    if holdings.is_empty() {
        return PerceptionMetrics::default();
    }
    let count = holdings.len() as f64;

    let mean_absolute_error = holdings
        .iter()
        .map(|h| (h.perceived_utility - h.true_utility).abs())
        .sum::<f64>()
        / count;
    let mean_group_bias = holdings
        .iter()
        .map(|h| h.master_utility - h.true_utility)
        .sum::<f64>()
        / count;

    let means: Vec<f64> = agents.iter().filter_map(|a| a.mean_perceived_utility()).collect();
    let lo = means.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = means.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    PerceptionMetrics {
        mean_absolute_error,
        mean_group_bias,
        perceived_spread: hi - lo,
    }
}

/// Write a snapshot as pretty JSON, creating parent directories as needed.
pub fn write_snapshot(snapshot: &LandscapeSnapshot, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, snapshot.to_json_pretty()?)?;
    tracing::info!("Wrote snapshot to {}", path.display());
    Ok(())
}
