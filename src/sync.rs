//! Reader/writer synchronization for mutable graphs.

use std::fmt::{self, Display};
use std::marker::PhantomData;

use parking_lot::RwLock;

use crate::edge::Edge;
use crate::graph::{Graph, GraphError, GraphMut};

/// Lock acquisition policy for [`SyncGraph`] readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fairness {
    /// Readers may overtake parked writers. Highest read throughput, but a
    /// steady stream of readers can starve a writer.
    #[default]
    Throughput,
    /// Task-fair acquisition: waiters are served roughly first-in first-out,
    /// so writers cannot be starved by readers.
    Fair,
}

/// A synchronizing decorator around any [`GraphMut`] implementation.
///
/// Delegates every operation to the wrapped graph behind a single
/// reader/writer lock: queries take the shared lock and run in parallel,
/// mutations take the exclusive lock. Results and failures of the delegate
/// pass through unchanged, and the lock is released on every exit path,
/// including unwinding.
///
/// The wrapped graph is taken by value, so the decorator is the only owner of
/// it and no mutation can bypass the lock. The orientation flag is captured at
/// wrap time and served without locking, since it is immutable for the
/// graph's lifetime.
///
/// Query results are snapshots taken while the shared lock was held; they stay
/// consistent after the lock is released but do not track later mutation.
///
/// # Example
///
/// ```
/// # use std::sync::Arc;
/// # use pathgraph::{AdjacencyGraph, Graph, SyncGraph};
/// let graph = Arc::new(SyncGraph::new(AdjacencyGraph::directed()));
///
/// let writer = Arc::clone(&graph);
/// std::thread::spawn(move || {
///     writer.add_edge("a", "b");
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(graph.nodes().len(), 2);
/// ```
pub struct SyncGraph<G, N> {
    inner: RwLock<G>,
    directed: bool,
    fairness: Fairness,
    _node: PhantomData<N>,
}

impl<G: GraphMut<N>, N> SyncGraph<G, N> {
    /// Wrap `graph` with the default [`Fairness::Throughput`] policy.
    pub fn new(graph: G) -> Self {
        Self::with_fairness(graph, Fairness::default())
    }

    /// Wrap `graph` with an explicit lock fairness policy.
    pub fn with_fairness(graph: G, fairness: Fairness) -> Self {
        Self {
            directed: graph.is_directed(),
            inner: RwLock::new(graph),
            fairness,
            _node: PhantomData,
        }
    }

    /// The configured reader acquisition policy.
    pub fn fairness(&self) -> Fairness {
        self.fairness
    }

    /// Release the lock and return the wrapped graph.
    pub fn into_inner(self) -> G {
        self.inner.into_inner()
    }

    /// Run a closure under the shared lock.
    fn read<R>(&self, op: impl FnOnce(&G) -> R) -> R {
        match self.fairness {
            Fairness::Fair => op(&self.inner.read()),
            Fairness::Throughput => op(&self.inner.read_recursive()),
        }
    }

    /// Add a vertex under the exclusive lock.
    ///
    /// See [`GraphMut::add_vertex`] for the contract.
    pub fn add_vertex(&self, node: N) -> bool {
        self.inner.write().add_vertex(node)
    }

    /// Add an edge under the exclusive lock.
    ///
    /// See [`GraphMut::add_edge`] for the contract.
    pub fn add_edge(&self, node_u: N, node_v: N) -> bool {
        self.inner.write().add_edge(node_u, node_v)
    }

    /// Bulk connect under a single exclusive lock acquisition.
    ///
    /// See [`GraphMut::connect_to_each`] for the contract.
    pub fn connect_to_each<I>(&self, source: N, targets: I) -> Result<Vec<bool>, GraphError>
    where
        I: IntoIterator<Item = N>,
    {
        self.inner.write().connect_to_each(source, targets)
    }
}

impl<G: GraphMut<N>, N> Graph<N> for SyncGraph<G, N> {
    fn path(&self, source: &N, target: &N) -> Vec<Edge<N>> {
        self.read(|graph| graph.path(source, target))
    }

    fn nodes(&self) -> Vec<N> {
        self.read(|graph| graph.nodes())
    }

    fn edges(&self) -> Vec<Edge<N>> {
        self.read(|graph| graph.edges())
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<G: GraphMut<N>, N> From<G> for SyncGraph<G, N> {
    fn from(graph: G) -> Self {
        Self::new(graph)
    }
}

impl<G: GraphMut<N> + Display, N> Display for SyncGraph<G, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|graph| graph.fmt(f))
    }
}
