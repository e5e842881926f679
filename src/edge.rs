//! Graph edges with orientation-dependent identity.

use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// Whether an edge distinguishes its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The edge runs from a source to a target.
    Ordered,
    /// The edge connects its endpoints symmetrically.
    Unordered,
}

/// A connection between two node values.
///
/// An *ordered* edge `(u, v)` runs from node `u` to node `v` and is only equal
/// to another ordered edge with the same source and target. An *unordered*
/// edge treats `(u, v)` and `(v, u)` as the same edge; equality and hashing
/// check both endpoint orderings. Edges of different orientations are never
/// equal, whatever their endpoints.
///
/// Edges are immutable once constructed. The node type must carry value
/// semantics: well-defined equality and hashing, no identity-based comparison.
///
/// # Example
///
/// ```
/// # use pathgraph::Edge;
/// let ab = Edge::unordered("a", "b");
/// let ba = Edge::unordered("b", "a");
/// assert_eq!(ab, ba);
///
/// let directed = Edge::ordered("a", "b");
/// assert_ne!(directed, ab);
/// assert_eq!(directed.source(), Some(&"a"));
/// ```
#[derive(Debug, Clone)]
pub struct Edge<N> {
    node_u: N,
    node_v: N,
    orientation: Orientation,
}

impl<N> Edge<N> {
    /// Create an ordered edge from `source` to `target`.
    pub fn ordered(source: N, target: N) -> Self {
        Self {
            node_u: source,
            node_v: target,
            orientation: Orientation::Ordered,
        }
    }

    /// Create an unordered edge between `node_u` and `node_v`.
    pub fn unordered(node_u: N, node_v: N) -> Self {
        Self {
            node_u,
            node_v,
            orientation: Orientation::Unordered,
        }
    }

    /// The first endpoint in construction order.
    ///
    /// For an ordered edge this is the source.
    #[inline]
    pub fn node_u(&self) -> &N {
        &self.node_u
    }

    /// The second endpoint in construction order.
    ///
    /// For an ordered edge this is the target.
    #[inline]
    pub fn node_v(&self) -> &N {
        &self.node_v
    }

    /// Both endpoints in construction order.
    #[inline]
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.node_u, &self.node_v)
    }

    /// The source node, or `None` for an unordered edge.
    pub fn source(&self) -> Option<&N> {
        match self.orientation {
            Orientation::Ordered => Some(&self.node_u),
            Orientation::Unordered => None,
        }
    }

    /// The target node, or `None` for an unordered edge.
    pub fn target(&self) -> Option<&N> {
        match self.orientation {
            Orientation::Ordered => Some(&self.node_v),
            Orientation::Unordered => None,
        }
    }

    /// Whether the edge distinguishes source from target.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.orientation == Orientation::Ordered
    }

    /// The edge's orientation tag.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl<N: Eq> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        if self.orientation != other.orientation {
            return false;
        }

        match self.orientation {
            Orientation::Ordered => {
                self.node_u == other.node_u && self.node_v == other.node_v
            }
            Orientation::Unordered => {
                (self.node_u == other.node_u && self.node_v == other.node_v)
                    || (self.node_u == other.node_v && self.node_v == other.node_u)
            }
        }
    }
}

impl<N: Eq> Eq for Edge<N> {}

impl<N: Hash> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.orientation.hash(state);

        match self.orientation {
            Orientation::Ordered => {
                self.node_u.hash(state);
                self.node_v.hash(state);
            }
            Orientation::Unordered => {
                // (u, v) and (v, u) are the same edge and must hash alike:
                // combine the two ordered pair hashes commutatively.
                let uv = hash_pair(&self.node_u, &self.node_v);
                let vu = hash_pair(&self.node_v, &self.node_u);
                state.write_u64(uv.wrapping_add(vu));
            }
        }
    }
}

fn hash_pair<N: Hash>(a: &N, b: &N) -> u64 {
    let mut hasher = DefaultHasher::new();
    a.hash(&mut hasher);
    b.hash(&mut hasher);
    hasher.finish()
}

impl<N: Display> Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Ordered => write!(f, "{} -> {}", self.node_u, self.node_v),
            Orientation::Unordered => write!(f, "{} -- {}", self.node_u, self.node_v),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn hash_of(edge: &Edge<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        edge.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn ordered_equality_respects_direction() {
        assert_eq!(Edge::ordered(1, 2), Edge::ordered(1, 2));
        assert_ne!(Edge::ordered(1, 2), Edge::ordered(2, 1));
    }

    #[test]
    fn unordered_equality_is_symmetric() {
        assert_eq!(Edge::unordered(1, 2), Edge::unordered(2, 1));
        assert_eq!(hash_of(&Edge::unordered(1, 2)), hash_of(&Edge::unordered(2, 1)));
    }

    #[test]
    fn orientations_never_mix() {
        assert_ne!(Edge::ordered(1, 2), Edge::unordered(1, 2));
        assert_ne!(Edge::ordered(1, 1), Edge::unordered(1, 1));
    }

    #[test]
    fn endpoints_keep_construction_order() {
        let edge = Edge::ordered("u", "v");
        assert_eq!(edge.node_u(), edge.source().unwrap());
        assert_eq!(edge.node_v(), edge.target().unwrap());

        let edge = Edge::unordered("u", "v");
        assert_eq!(edge.endpoints(), (&"u", &"v"));
        assert_eq!(edge.source(), None);
        assert_eq!(edge.target(), None);
    }

    #[test]
    fn edges_deduplicate_in_hash_sets() {
        let mut set = HashSet::new();
        assert!(set.insert(Edge::unordered(1, 2)));
        assert!(!set.insert(Edge::unordered(2, 1)));
        assert!(set.insert(Edge::ordered(1, 2)));
        assert!(set.insert(Edge::ordered(2, 1)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn display_shows_orientation() {
        assert_eq!(Edge::ordered(1, 2).to_string(), "1 -> 2");
        assert_eq!(Edge::unordered(1, 2).to_string(), "1 -- 2");
    }

    proptest! {
        #[test]
        fn ordered_hash_consistent_with_equality(a: i32, b: i32) {
            let e1 = Edge::ordered(a, b);
            let e2 = Edge::ordered(a, b);
            prop_assert_eq!(&e1, &e2);
            prop_assert_eq!(hash_of(&e1), hash_of(&e2));
        }

        #[test]
        fn ordered_swap_differs(a: i32, b: i32) {
            prop_assume!(a != b);
            prop_assert_ne!(Edge::ordered(a, b), Edge::ordered(b, a));
        }

        #[test]
        fn unordered_swap_equal_and_hash_consistent(a: i32, b: i32) {
            let uv = Edge::unordered(a, b);
            let vu = Edge::unordered(b, a);
            prop_assert_eq!(&uv, &vu);
            prop_assert_eq!(hash_of(&uv), hash_of(&vu));
        }

        #[test]
        fn equality_is_reflexive(a: i32, b: i32) {
            let ordered = Edge::ordered(a, b);
            let unordered = Edge::unordered(a, b);
            prop_assert_eq!(&ordered, &ordered);
            prop_assert_eq!(&unordered, &unordered);
        }
    }
}
