//! Per-node adjacency records.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::edge::Edge;

/// Adjacency record for a single node.
///
/// Maps every directly reachable neighbor to the edge realizing that
/// adjacency. For an ordered edge `(s, t)` only `s`'s record lists `t`; for an
/// unordered edge both endpoints list each other. Entries are kept in
/// insertion order, so neighbor enumeration is stable across repeated queries
/// as long as the graph is not mutated in between.
///
/// Records are created empty when a vertex is added and only ever grow; there
/// is no edge removal.
#[derive(Debug, Clone)]
pub struct Connections<N> {
    node: N,
    adjacent: IndexMap<N, Edge<N>>,
}

impl<N: Eq + Hash + Clone> Connections<N> {
    /// Create an empty record owned by `node`.
    pub fn new(node: N) -> Self {
        Self {
            node,
            adjacent: IndexMap::new(),
        }
    }

    /// The node this record belongs to.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Iterator over the neighbors reachable from the owning node, in the
    /// order their edges were recorded.
    pub fn adjacent_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacent.keys()
    }

    /// The edge reaching `node`, or `None` if it is not adjacent.
    ///
    /// # Example
    ///
    /// ```
    /// # use pathgraph::{Connections, Edge};
    /// let mut connections = Connections::new("a");
    /// connections.record(Edge::ordered("a", "b"));
    ///
    /// assert_eq!(connections.edge_to(&"b"), Some(&Edge::ordered("a", "b")));
    /// assert_eq!(connections.edge_to(&"c"), None);
    /// ```
    pub fn edge_to(&self, node: &N) -> Option<&Edge<N>> {
        self.adjacent.get(node)
    }

    /// Register a new edge touching the owning node.
    ///
    /// An ordered edge is keyed by its target. An unordered edge is keyed by
    /// whichever endpoint differs from the owning node, so symmetric insertion
    /// never lists a node as its own neighbor.
    ///
    /// Returns whether the registration succeeded. The current rules always
    /// accept; the boolean leaves room for exclusivity rules later.
    pub fn record(&mut self, edge: Edge<N>) -> bool {
        if edge.is_ordered() {
            let target = edge.node_v().clone();
            self.adjacent.insert(target, edge);
        } else {
            let u = edge.node_u().clone();
            let v = edge.node_v().clone();

            if u != self.node {
                self.adjacent.insert(u, edge.clone());
            }

            if v != self.node {
                self.adjacent.insert(v, edge);
            }
        }

        true
    }

    /// Whether the owning node has no recorded neighbors.
    pub fn is_disjoint(&self) -> bool {
        self.adjacent.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordered_edges_key_by_target() {
        let mut connections = Connections::new(1);
        assert!(connections.record(Edge::ordered(1, 2)));

        assert!(connections.adjacent_nodes().eq([&2]));
        assert_eq!(connections.edge_to(&2), Some(&Edge::ordered(1, 2)));
        assert_eq!(connections.edge_to(&1), None);
    }

    #[test]
    fn unordered_edges_skip_the_owning_node() {
        let mut connections = Connections::new(1);
        assert!(connections.record(Edge::unordered(1, 2)));
        assert!(connections.record(Edge::unordered(3, 1)));

        assert!(connections.adjacent_nodes().eq([&2, &3]));
        assert_eq!(connections.edge_to(&3), Some(&Edge::unordered(1, 3)));
    }

    #[test]
    fn self_loop_never_lists_the_node_itself() {
        let mut connections = Connections::new(1);
        assert!(connections.record(Edge::unordered(1, 1)));

        assert!(connections.is_disjoint());
        assert_eq!(connections.edge_to(&1), None);
    }

    #[test]
    fn recorded_edges_agree_with_their_keys() {
        let mut connections = Connections::new("a");
        connections.record(Edge::ordered("a", "b"));
        connections.record(Edge::ordered("a", "c"));

        for neighbor in connections.adjacent_nodes() {
            let edge = connections.edge_to(neighbor).unwrap();
            assert_eq!(edge.node_v(), neighbor);
        }
    }

    #[test]
    fn enumeration_follows_insertion_order() {
        let mut connections = Connections::new(0);
        for neighbor in [5, 3, 9, 1] {
            connections.record(Edge::ordered(0, neighbor));
        }

        assert!(connections.adjacent_nodes().eq([&5, &3, &9, &1]));
    }

    #[test]
    fn empty_record_is_disjoint() {
        let connections = Connections::<i32>::new(7);
        assert!(connections.is_disjoint());
        assert_eq!(connections.adjacent_nodes().count(), 0);
    }
}
