//! Edge identifier for topology graphs.
//!
//! Every piece of two-terminal equipment (breaker, disconnector, transformer,
//! ...) becomes one edge. [`EdgeId`] names that edge inside the graph; the
//! equipment identity itself is the edge's label.

use std::fmt;

/// A strongly-typed identifier for edges within a topology graph.
///
/// Edge ids are assigned sequentially from 0 in insertion order. Replacing the
/// label of an existing edge through
/// [`AdjacencyGraph::set_edge`](crate::graph::AdjacencyGraph::set_edge) keeps its id.
///
/// # Examples
///
/// ```rust
/// use gridwalk::graph::{AdjacencyGraph, EdgeId};
///
/// let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::undirected();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let cb = graph.set_edge(a, b, "S1>220>B220>CB1")?;
///
/// assert_eq!(cb, EdgeId::new(0));
/// assert_eq!(graph.edge(cb), Some(&"S1>220>B220>CB1"));
/// # Ok::<(), gridwalk::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}
