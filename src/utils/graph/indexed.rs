//! Keyed graph wrapper for domain-named nodes.
//!
//! This module provides [`IndexedGraph`], a wrapper around [`AdjacencyGraph`]
//! that maps domain keys (connectivity-node path names, equipment identities)
//! onto dense [`NodeId`]s and back.
//!
//! # Motivation
//!
//! Topology code builds the graph from names found in a substation document,
//! runs traversals over `NodeId`s and reports results by name again.
//! `IndexedGraph` keeps both directions of that mapping in one place.
//!
//! # Examples
//!
//! ```rust
//! use gridwalk::graph::IndexedGraph;
//!
//! let mut graph: IndexedGraph<String, String> = IndexedGraph::undirected();
//! graph.set_edge("Bus_A/L1".into(), "B220/L1".into(), "B220>DIS1".into())?;
//! graph.set_edge("B220/L1".into(), "B220/L2".into(), "B220>CB1".into())?;
//!
//! let zone = graph.bounded_reach_from(["Bus_A/L1"], |label| label.ends_with("CB1"))?;
//! assert_eq!(graph.map_nodes_to_keys(zone.order()), vec!["Bus_A/L1", "B220/L1", "B220/L2"]);
//! # Ok::<(), gridwalk::Error>(())
//! ```

use std::{borrow::Borrow, collections::HashMap, fmt, hash::Hash};

use crate::{
    graph::{
        algorithms::{self, TraversalOrder, TraversalResult, Visit, VisitControl},
        AdjacencyGraph, EdgeId, EdgeLabels, GraphBase, Neighbors, NodeId, Successors,
    },
    Error, Result,
};

/// A graph whose nodes are identified by keys of type `K`.
///
/// The key is stored as the node's data in the underlying [`AdjacencyGraph`];
/// a hash index resolves keys to ids. Adding a key twice yields the same node.
///
/// # Type Parameters
///
/// * `K` - The domain key type for nodes
/// * `E` - The edge label type
#[derive(Debug, Clone)]
pub struct IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    graph: AdjacencyGraph<K, E>,
    key_to_node: HashMap<K, NodeId>,
}

impl<K, E> Default for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::undirected()
    }
}

impl<K, E> IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty keyed graph.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            graph: AdjacencyGraph::new(directed),
            key_to_node: HashMap::new(),
        }
    }

    /// Creates a new empty directed keyed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates a new empty undirected keyed graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates a new keyed graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(directed: bool, node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: AdjacencyGraph::with_capacity(directed, node_capacity, edge_capacity),
            key_to_node: HashMap::with_capacity(node_capacity),
        }
    }

    /// Adds a node with the given key, or returns the existing `NodeId` if
    /// already present.
    pub fn add_node(&mut self, key: K) -> NodeId {
        if let Some(&node_id) = self.key_to_node.get(&key) {
            return node_id;
        }

        let node_id = self.graph.add_node(key.clone());
        self.key_to_node.insert(key, node_id);
        node_id
    }

    /// Sets the edge between two keyed nodes, creating missing nodes first.
    ///
    /// An existing edge between the pair keeps its id and gets the new label.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph operation fails.
    pub fn set_edge(&mut self, from: K, to: K, label: E) -> Result<EdgeId> {
        let from_node = self.add_node(from);
        let to_node = self.add_node(to);
        self.graph.set_edge(from_node, to_node, label)
    }

    /// Returns the `NodeId` for a given key, if it exists.
    #[must_use]
    pub fn node_id<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_node.get(key).copied()
    }

    /// Returns `true` if a node with the given key exists.
    #[must_use]
    pub fn has_node<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_node.contains_key(key)
    }

    /// Returns the key for a given `NodeId`, if it exists.
    #[must_use]
    pub fn key(&self, node_id: NodeId) -> Option<&K> {
        self.graph.node(node_id)
    }

    /// Returns the label of the edge joining two keyed nodes.
    ///
    /// Orientation is ignored on undirected graphs.
    #[must_use]
    pub fn edge<Q>(&self, from: &Q, to: &Q) -> Option<&E>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let from = self.node_id(from)?;
        let to = self.node_id(to)?;
        self.graph.edge_label(from, to)
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns an iterator over all keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.graph.nodes().map(|(_, key)| key)
    }

    /// Returns an iterator over `(from, to, label)` triples in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, &E)> + '_ {
        self.graph.edges().filter_map(|(_, source, target, label)| {
            Some((self.graph.node(source)?, self.graph.node(target)?, label))
        })
    }

    /// Maps a slice of `NodeId`s back to domain keys.
    ///
    /// Ids without a node are skipped.
    #[must_use]
    pub fn map_nodes_to_keys(&self, nodes: &[NodeId]) -> Vec<&K> {
        nodes.iter().filter_map(|&node_id| self.key(node_id)).collect()
    }

    /// Resolves start keys to node ids, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStartNode`] naming the first key that is not in
    /// the graph.
    pub fn resolve<'q, Q, I>(&self, keys: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = &'q Q>,
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized + 'q,
    {
        keys.into_iter()
            .map(|key| {
                self.node_id(key)
                    .ok_or_else(|| Error::UnknownStartNode(key.to_string()))
            })
            .collect()
    }
}

// Algorithm convenience methods
impl<K, E> IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Pre-order traversal from keyed start nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStartNode`] if any start key is not in the graph.
    pub fn traverse_from<'q, Q, I, F>(&self, starts: I, visitor: F) -> Result<TraversalResult>
    where
        I: IntoIterator<Item = &'q Q>,
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized + 'q,
        F: FnMut(&Visit<'_, Self>) -> VisitControl,
    {
        let starts = self.resolve(starts)?;
        algorithms::traverse(self, &starts, TraversalOrder::PreOrder, visitor)
    }

    /// Boundary-limited reach from keyed start nodes.
    ///
    /// See [`algorithms::bounded_reach`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStartNode`] if any start key is not in the graph.
    pub fn bounded_reach_from<'q, Q, I, P>(&self, starts: I, is_boundary_edge: P) -> Result<TraversalResult>
    where
        I: IntoIterator<Item = &'q Q>,
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized + 'q,
        P: FnMut(&E) -> bool,
    {
        let starts = self.resolve(starts)?;
        algorithms::bounded_reach(self, &starts, is_boundary_edge)
    }

    /// Labels of the edges a finished traversal followed, in visit order.
    #[must_use]
    pub fn traversed_edges(&self, result: &TraversalResult) -> Vec<&E> {
        algorithms::edges_along_visit_order(result, self)
    }
}

impl<K, E> GraphBase for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        GraphBase::node_ids(&self.graph)
    }

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }
}

impl<K, E> Successors for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}

impl<K, E> Neighbors for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.neighbors(node)
    }
}

impl<K, E> EdgeLabels for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    type Label = E;

    fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&E> {
        self.graph.edge_between(from, to)
    }
}
