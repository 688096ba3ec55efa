//! Trait definitions for graph abstractions.
//!
//! Traversal and boundary search are written against these traits, not
//! against a concrete graph type. Any topology representation that can answer
//! the questions below can be walked.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node count, node iteration and directedness
//! - [`Successors`] - Directed adjacency (targets of outgoing edges)
//! - [`Neighbors`] - Undirected adjacency (every node sharing an edge)
//! - [`EdgeLabels`] - Label lookup for the edge joining two nodes
//! - [`Topology`] - Everything the traversal engine needs, in one bound
//!
//! # Design Principles
//!
//! ## Read-Only Contract
//!
//! None of these traits mutate the graph. Construction (`set_node`,
//! `set_edge`) is an inherent concern of the concrete graph type, so a graph
//! handed to an algorithm is guaranteed to stay unchanged for the duration of
//! the walk.
//!
//! ## Iterator-Based Adjacency
//!
//! Adjacency queries return iterators. The traversal engine consumes them in
//! the order they are produced, so that order is part of the observable
//! behaviour of a graph implementation.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in the graph.
    ///
    /// The iteration order is the order in which nodes were added.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if edges have a direction.
    ///
    /// Fixed at construction. Traversals over directed graphs follow
    /// [`Successors`]; over undirected graphs they follow [`Neighbors`].
    fn is_directed(&self) -> bool;

    /// Returns `true` if `node` names a node of this graph.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use gridwalk::graph::{AdjacencyGraph, NodeId, Successors};
///
/// let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::directed();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.set_edge(a, b, ())?;
///
/// let successors: Vec<NodeId> = graph.successors(a).collect();
/// assert_eq!(successors, vec![b]);
/// assert_eq!(graph.successors(b).count(), 0);
/// # Ok::<(), gridwalk::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`. On an
    /// undirected graph every incident edge counts as outgoing.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support undirected adjacency queries.
///
/// # Examples
///
/// ```rust
/// use gridwalk::graph::{AdjacencyGraph, Neighbors, NodeId};
///
/// let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::undirected();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.set_edge(a, b, ())?;
/// graph.set_edge(c, b, ())?;
///
/// let around_b: Vec<NodeId> = graph.neighbors(b).collect();
/// assert_eq!(around_b, vec![a, c]);
/// # Ok::<(), gridwalk::Error>(())
/// ```
pub trait Neighbors: GraphBase {
    /// Returns an iterator over every node sharing an edge with `node`,
    /// regardless of edge direction.
    ///
    /// Each neighbor is yielded once, in the order the connecting edges were
    /// first added.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs whose edges carry a label.
///
/// In a substation topology the label is the identity of the equipment the
/// edge represents. The traversal engine never interprets it.
pub trait EdgeLabels: GraphBase {
    /// The label type stored on edges.
    type Label;

    /// Returns the label of the edge joining `from` and `to`, if any.
    ///
    /// On a directed graph only an edge `from -> to` matches. On an
    /// undirected graph either orientation matches.
    fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Self::Label>;
}

/// Everything the traversal engine and the boundary search consume.
///
/// Blanket-implemented for every graph providing both adjacency flavours and
/// labeled edges.
pub trait Topology: Successors + Neighbors + EdgeLabels {}

impl<G> Topology for G where G: Successors + Neighbors + EdgeLabels {}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal directed test graph with labeled edges
    struct TestGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId, &'static str)>,
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.node_count).map(NodeId::new)
        }

        fn is_directed(&self) -> bool {
            true
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(src, _, _)| *src == node)
                .map(|(_, dst, _)| *dst)
        }
    }

    impl Neighbors for TestGraph {
        fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges.iter().filter_map(move |&(src, dst, _)| {
                if src == node {
                    Some(dst)
                } else if dst == node {
                    Some(src)
                } else {
                    None
                }
            })
        }
    }

    impl EdgeLabels for TestGraph {
        type Label = &'static str;

        fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Self::Label> {
            self.edges
                .iter()
                .find(|(src, dst, _)| *src == from && *dst == to)
                .map(|(_, _, label)| label)
        }
    }

    fn sample() -> TestGraph {
        TestGraph {
            node_count: 3,
            edges: vec![
                (NodeId::new(0), NodeId::new(1), "e1"),
                (NodeId::new(2), NodeId::new(1), "e2"),
            ],
        }
    }

    #[test]
    fn test_graph_base() {
        let graph = sample();
        assert_eq!(graph.node_count(), 3);
        assert!(graph.is_directed());
        assert!(graph.contains_node(NodeId::new(2)));
        assert!(!graph.contains_node(NodeId::new(3)));
    }

    #[test]
    fn test_successors_follow_direction() {
        let graph = sample();
        let succ: Vec<NodeId> = graph.successors(NodeId::new(2)).collect();
        assert_eq!(succ, vec![NodeId::new(1)]);
        assert_eq!(graph.successors(NodeId::new(1)).count(), 0);
    }

    #[test]
    fn test_neighbors_ignore_direction() {
        let graph = sample();
        let around: Vec<NodeId> = graph.neighbors(NodeId::new(1)).collect();
        assert_eq!(around, vec![NodeId::new(0), NodeId::new(2)]);
    }

    #[test]
    fn test_edge_labels() {
        let graph = sample();
        assert_eq!(graph.edge_between(NodeId::new(0), NodeId::new(1)), Some(&"e1"));
        assert_eq!(graph.edge_between(NodeId::new(1), NodeId::new(0)), None);
    }

    #[test]
    fn test_topology_blanket_impl() {
        fn needs_topology<G: Topology>(g: &G) -> usize {
            g.node_count()
        }
        assert_eq!(needs_topology(&sample()), 3);
    }
}
