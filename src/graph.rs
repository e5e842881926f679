//! Value-keyed graphs with breadth-first shortest-path queries.

use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

use crate::connections::Connections;
use crate::edge::Edge;

/// Error returned by [`GraphMut::connect_to_each`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("no targets to connect")]
    NoTargets,
}

/// Read-only capabilities of a graph over node values of type `N`.
///
/// A graph is homogeneously directed or undirected, fixed at construction.
/// Query results are point-in-time snapshots rather than live views, so a
/// consumer can never observe mutation that happens after the call returns.
pub trait Graph<N> {
    /// A minimum-edge-count path from `source` to `target`, first hop first.
    ///
    /// Empty when either endpoint is not in the graph, when `source` equals
    /// `target` and no self-loop exists, or when `target` is unreachable.
    fn path(&self, source: &N, target: &N) -> Vec<Edge<N>>;

    /// Snapshot of the vertex set, in insertion order.
    fn nodes(&self) -> Vec<N>;

    /// Snapshot of the edge set, in insertion order.
    fn edges(&self) -> Vec<Edge<N>>;

    /// Whether edges of this graph are ordered.
    fn is_directed(&self) -> bool;
}

/// Mutation capabilities of a graph over node values of type `N`.
pub trait GraphMut<N>: Graph<N> {
    /// Add a vertex. Returns `false` without touching the graph when the
    /// vertex is already present.
    fn add_vertex(&mut self, node: N) -> bool;

    /// Add an edge between `node_u` and `node_v`, creating either vertex if
    /// it is missing. Returns `false` without further mutation when the same
    /// edge already exists; parallel edges are not supported.
    fn add_edge(&mut self, node_u: N, node_v: N) -> bool;

    /// Add one edge from `source` to each of `targets`, in order.
    ///
    /// Returns one boolean per target with the corresponding
    /// [`add_edge`](GraphMut::add_edge) result. An empty target collection is
    /// an error and performs no mutation.
    fn connect_to_each<I>(&mut self, source: N, targets: I) -> Result<Vec<bool>, GraphError>
    where
        I: IntoIterator<Item = N>;
}

/// A mutable in-memory graph keyed by node values.
///
/// Nodes map to their [`Connections`] record; edges live in one global set.
/// Vertices and edges only accumulate, there is no removal. The graph is not
/// safe for concurrent use; wrap it in a [`SyncGraph`](crate::SyncGraph) when
/// threads share it.
///
/// # Example
///
/// ```
/// # use pathgraph::{AdjacencyGraph, Edge, Graph, GraphMut};
/// let mut graph = AdjacencyGraph::directed();
///
/// assert!(graph.add_edge("a", "b"));
/// assert!(graph.add_edge("b", "c"));
///
/// let path = graph.path(&"a", &"c");
/// assert_eq!(path, [Edge::ordered("a", "b"), Edge::ordered("b", "c")]);
/// assert!(graph.path(&"c", &"a").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    directed: bool,
    nodes: IndexMap<N, Connections<N>>,
    edges: IndexSet<Edge<N>>,
}

impl<N: Eq + Hash + Clone> AdjacencyGraph<N> {
    /// Create an empty graph with the given orientation.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: IndexMap::new(),
            edges: IndexSet::new(),
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Number of vertices in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Whether `node` is a vertex of the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// The edge variant this graph builds for a pair of endpoints.
    fn edge_between(&self, node_u: N, node_v: N) -> Edge<N> {
        if self.directed {
            Edge::ordered(node_u, node_v)
        } else {
            Edge::unordered(node_u, node_v)
        }
    }

    fn add_vertex_if_absent(&mut self, node: N) {
        if !self.nodes.contains_key(&node) {
            self.nodes.insert(node.clone(), Connections::new(node));
        }
    }

    /// Breadth-first search from `source`, reconstructing the edge path once
    /// `target` is dequeued.
    fn search(&self, source: &N, target: &N) -> Vec<Edge<N>> {
        let connections = &self.nodes[source];
        if connections.is_disjoint() {
            return Vec::new();
        }

        // Predecessor map: discovered node -> the node it was reached from.
        // Insertion order keeps repeated queries deterministic.
        let mut visited: IndexMap<N, N> = IndexMap::new();
        let mut queue: VecDeque<N> = VecDeque::new();
        queue.push_back(source.clone());

        while let Some(current) = queue.pop_front() {
            if current == *target {
                return self.backtrace(source, target, &visited);
            }

            for neighbor in self.nodes[&current].adjacent_nodes() {
                if !visited.contains_key(neighbor) {
                    queue.push_back(neighbor.clone());
                    visited.insert(neighbor.clone(), current.clone());
                }
            }
        }

        // Queue exhausted without reaching the target; the backtrace yields
        // the empty path since the target was never discovered.
        self.backtrace(source, target, &visited)
    }

    /// Walk predecessor links back from `target`, collecting the edge taken
    /// at each step from the predecessor's adjacency record.
    fn backtrace(&self, source: &N, target: &N, visited: &IndexMap<N, N>) -> Vec<Edge<N>> {
        if !visited.contains_key(target) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut node = target;

        while let Some(previous) = visited.get(node) {
            if let Some(edge) = self.nodes[previous].edge_to(node) {
                path.push(edge.clone());
            }

            node = previous;
            if node == source {
                break;
            }
        }

        path.reverse();
        path
    }
}

impl<N: Eq + Hash + Clone> Graph<N> for AdjacencyGraph<N> {
    fn path(&self, source: &N, target: &N) -> Vec<Edge<N>> {
        if !self.nodes.contains_key(source) || !self.nodes.contains_key(target) {
            return Vec::new();
        }

        // Fast path: a direct edge is always a shortest path.
        let direct = self.edge_between(source.clone(), target.clone());
        if self.edges.contains(&direct) {
            return vec![direct];
        }

        self.search(source, target)
    }

    fn nodes(&self) -> Vec<N> {
        self.nodes.keys().cloned().collect()
    }

    fn edges(&self) -> Vec<Edge<N>> {
        self.edges.iter().cloned().collect()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<N: Eq + Hash + Clone> GraphMut<N> for AdjacencyGraph<N> {
    fn add_vertex(&mut self, node: N) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }

        self.nodes.insert(node.clone(), Connections::new(node));
        true
    }

    fn add_edge(&mut self, node_u: N, node_v: N) -> bool {
        // Missing endpoints become vertices; that is never a failure.
        self.add_vertex_if_absent(node_u.clone());
        self.add_vertex_if_absent(node_v.clone());

        let edge = self.edge_between(node_u.clone(), node_v.clone());
        if self.edges.contains(&edge) {
            return false;
        }

        let recorded = if self.directed {
            self.nodes[&node_u].record(edge.clone())
        } else {
            self.nodes[&node_u].record(edge.clone()) && self.nodes[&node_v].record(edge.clone())
        };

        self.edges.insert(edge) && recorded
    }

    fn connect_to_each<I>(&mut self, source: N, targets: I) -> Result<Vec<bool>, GraphError>
    where
        I: IntoIterator<Item = N>,
    {
        let targets: Vec<N> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(GraphError::NoTargets);
        }

        Ok(targets
            .into_iter()
            .map(|target| self.add_edge(source.clone(), target))
            .collect())
    }
}

impl<N: Eq + Hash + Clone> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<N: Eq + Hash + Clone + Display> Display for AdjacencyGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orientation = if self.directed { "directed" } else { "undirected" };
        write!(f, "Graph({orientation}; [")?;

        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{edge}")?;
        }

        write!(f, "])")
    }
}
