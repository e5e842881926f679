//! Graph construction.

use std::hash::Hash;

use crate::graph::AdjacencyGraph;
use crate::sync::{Fairness, SyncGraph};

/// Builder selecting a graph's orientation before construction.
///
/// Orientation is the only construction-time parameter and is immutable for
/// the lifetime of the built graph.
///
/// # Example
///
/// ```
/// # use pathgraph::{Graph, GraphBuilder, GraphMut};
/// let mut graph = GraphBuilder::directed().build::<&str>();
///
/// graph.add_edge("a", "b");
/// assert!(graph.is_directed());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    directed: bool,
}

impl GraphBuilder {
    /// Start building a directed graph.
    pub fn directed() -> Self {
        Self { directed: true }
    }

    /// Start building an undirected graph.
    pub fn undirected() -> Self {
        Self { directed: false }
    }

    /// Build an empty graph with the selected orientation.
    pub fn build<N: Eq + Hash + Clone>(self) -> AdjacencyGraph<N> {
        AdjacencyGraph::new(self.directed)
    }

    /// Build an empty graph wrapped in a [`SyncGraph`] for shared use across
    /// threads.
    pub fn build_sync<N: Eq + Hash + Clone>(
        self,
        fairness: Fairness,
    ) -> SyncGraph<AdjacencyGraph<N>, N> {
        SyncGraph::with_fairness(self.build(), fairness)
    }
}
