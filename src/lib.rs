//! In-memory graphs keyed by node values, with directed and undirected
//! orientations, breadth-first shortest-path queries, and an optional
//! reader/writer-locked wrapper for shared use across threads.
//!
//! The central type is [`AdjacencyGraph`], a mutable graph whose vertices are
//! arbitrary values with `Eq + Hash + Clone` semantics. Its orientation is
//! fixed at construction and determines the identity rules of every [`Edge`]
//! it creates: ordered edges distinguish source from target, unordered edges
//! treat `(u, v)` and `(v, u)` as the same edge.
//!
//! [`AdjacencyGraph`] itself is not thread-safe. [`SyncGraph`] decorates any
//! [`GraphMut`] implementation with a reader/writer lock, letting queries run
//! in parallel while mutations get exclusive access.
//!
//! # Example
//!
//! ```
//! use pathgraph::{Graph, GraphBuilder, GraphMut};
//!
//! let mut graph = GraphBuilder::undirected().build();
//!
//! graph.add_edge("a", "b");
//! graph.add_edge("b", "c");
//!
//! let path = graph.path(&"a", &"c");
//! assert_eq!(path.len(), 2);
//! ```

pub mod builder;
pub mod connections;
pub mod edge;
pub mod graph;
pub mod sync;

pub use crate::builder::GraphBuilder;
pub use crate::connections::Connections;
pub use crate::edge::{Edge, Orientation};
pub use crate::graph::{AdjacencyGraph, Graph, GraphError, GraphMut};
pub use crate::sync::{Fairness, SyncGraph};
