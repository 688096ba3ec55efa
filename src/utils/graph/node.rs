//! Node identifier for topology graphs.
//!
//! A [`NodeId`] is the dense, engine-side name of a point in the network: a
//! connectivity node or a synthetic node standing in for single-terminal
//! equipment. Domain keys (connectivity-node path names, equipment
//! identities) are mapped onto `NodeId`s by [`IndexedGraph`](crate::graph::IndexedGraph).

use std::fmt;

/// A strongly-typed identifier for nodes within a topology graph.
///
/// `NodeId` wraps a `usize` index. Ids are handed out sequentially from 0 as
/// nodes are added, which lets per-traversal state (visited flags, parent
/// links) live in plain vectors indexed by node.
///
/// # Examples
///
/// ```rust
/// use gridwalk::graph::{AdjacencyGraph, NodeId};
///
/// let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::undirected();
/// let bus = graph.add_node("Bus_A/L1");
/// let feeder = graph.add_node("B220/L1");
///
/// assert_ne!(bus, feeder);
/// assert_eq!(feeder, NodeId::new(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage obtains ids from [`AdjacencyGraph::add_node`](crate::graph::AdjacencyGraph::add_node);
    /// a hand-made id is only meaningful if a node with that index exists.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
