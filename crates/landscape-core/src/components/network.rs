//! Network Component
//!
//! The undirected information-exchange graph. Node `i` hosts agent `i`.

use bevy_ecs::prelude::*;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::fmt;

/// Agent-to-agent graph, fixed for the run
#[derive(Resource, Debug, Clone)]
pub struct Network {
    graph: UnGraph<usize, ()>,
}

impl Network {
    pub(crate) fn from_graph(graph: UnGraph<usize, ()>) -> Self {
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `a` and `b` share an exchange channel
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        a < self.node_count()
            && b < self.node_count()
            && self.graph.contains_edge(NodeIndex::new(a), NodeIndex::new(b))
    }

    /// Neighbours of `node`, ascending
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        if node >= self.node_count() {
            return Vec::new();
        }
        let mut out: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(node))
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Edge list as `(low, high)` pairs, sorted
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = self
            .graph
            .edge_references()
            .map(|e| {
                let (a, b) = (e.source().index(), e.target().index());
                (a.min(b), a.max(b))
            })
            .collect();
        out.sort_unstable();
        out
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph with {} nodes and {} edges",
            self.node_count(),
            self.edge_count()
        )
    }
}
