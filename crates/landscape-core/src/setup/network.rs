//! Network Setup
//!
//! Watts-Strogatz small-world topology over the agents.

use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::network::Network;
use crate::error::{LandscapeError, Result};

/// Reject lattice degrees of `agents` or more and probabilities outside [0, 1].
pub fn validate_topology(agents: usize, neighbors: usize, rewire_prob: f64) -> Result<()> {
    if neighbors >= agents {
        return Err(LandscapeError::InvalidTopologyParams(format!(
            "neighbors ({}) must be smaller than agents ({})",
            neighbors, agents
        )));
    }
    if !(0.0..=1.0).contains(&rewire_prob) {
        return Err(LandscapeError::InvalidTopologyParams(format!(
            "rewire probability {} outside [0, 1]",
            rewire_prob
        )));
    }
    Ok(())
}

/// Build a small-world network of `agents` nodes.
///
/// Starts from a ring lattice where every node links to its `neighbors / 2`
/// nearest nodes on each side, then rewires each lattice edge `(u, u + j)` to
/// `(u, w)` with probability `rewire_prob`. Rewiring never creates self loops
/// or duplicate edges, so the edge count of the lattice is preserved.
///
/// The graph draws from its own stream seeded with `seed`.
pub fn build_network(agents: usize, neighbors: usize, rewire_prob: f64, seed: u64) -> Result<Network> {
    validate_topology(agents, neighbors, rewire_prob)?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = UnGraph::new_undirected();
    let nodes: Vec<NodeIndex> = (0..agents).map(|i| graph.add_node(i)).collect();

    let half_k = neighbors / 2;
    for j in 1..=half_k {
        for u in 0..agents {
            graph.add_edge(nodes[u], nodes[(u + j) % agents], ());
        }
    }

    for j in 1..=half_k {
        for u in 0..agents {
            if rng.gen::<f64>() >= rewire_prob {
                continue;
            }
            let v = (u + j) % agents;

            let mut w = rng.gen_range(0..agents);
            let mut saturated = false;
            while w == u || graph.contains_edge(nodes[u], nodes[w]) {
                w = rng.gen_range(0..agents);
                if graph.neighbors(nodes[u]).count() >= agents - 1 {
                    saturated = true;
                    break;
                }
            }
            if saturated {
                continue;
            }

            if let Some(edge) = graph.find_edge(nodes[u], nodes[v]) {
                graph.remove_edge(edge);
                graph.add_edge(nodes[u], nodes[w], ());
            }
        }
    }

    let network = Network::from_graph(graph);
    tracing::debug!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        neighbors,
        rewire_prob,
        "built small-world network"
    );
    Ok(network)
}
