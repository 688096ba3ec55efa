//! Adjacency-list graph used to model network topology.
//!
//! [`AdjacencyGraph`] stores typed node data and labeled edges. Whether edges
//! are directed is chosen once at construction and never changes. Substation
//! topologies are built undirected: a breaker conducts both ways.

use crate::{
    graph::{
        edge::EdgeId,
        node::NodeId,
        traits::{EdgeLabels, GraphBase, Neighbors, Successors},
    },
    Error, Result,
};

/// Internal storage for edge data and endpoints.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    /// Source node of the edge (first endpoint for undirected graphs)
    source: NodeId,
    /// Target node of the edge (second endpoint for undirected graphs)
    target: NodeId,
    /// User-provided label
    label: E,
}

impl<E> EdgeData<E> {
    /// The endpoint of this edge opposite to `node`.
    fn opposite(&self, node: NodeId) -> NodeId {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }
}

/// A graph with typed node data and labeled edges.
///
/// # Memory Layout
///
/// - Nodes live in a vector indexed by [`NodeId`]
/// - Edges live in a vector indexed by [`EdgeId`]
/// - Per node, three adjacency lists hold `EdgeId`s: outgoing, incoming and
///   incident (every edge touching the node, in insertion order)
///
/// # Edge Semantics
///
/// At most one edge exists per node pair (per ordered pair when directed).
/// [`set_edge`](Self::set_edge) on an existing pair replaces the label in
/// place, keeping the edge's id and adjacency position.
///
/// # Thread Safety
///
/// `AdjacencyGraph<N, E>` is [`Send`] and [`Sync`] when both `N` and `E` are.
/// Build it single-threaded, then share it immutably between analyses.
///
/// # Examples
///
/// ```rust
/// use gridwalk::graph::{AdjacencyGraph, Neighbors, NodeId};
///
/// let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::undirected();
/// let bus = graph.add_node("Bus_A/L1");
/// let bay = graph.add_node("B220/L1");
/// let line = graph.add_node("B220/L2");
///
/// graph.set_edge(bus, bay, "DIS1")?;
/// graph.set_edge(bay, line, "CB1")?;
///
/// assert_eq!(graph.edge_label(line, bay), Some(&"CB1"));
/// let around: Vec<NodeId> = graph.neighbors(bay).collect();
/// assert_eq!(around, vec![bus, line]);
/// # Ok::<(), gridwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, E> {
    /// Whether edges have a direction
    directed: bool,
    /// Node data storage
    nodes: Vec<N>,
    /// Edge data storage
    edges: Vec<EdgeData<E>>,
    /// Outgoing edges per node
    outgoing: Vec<Vec<EdgeId>>,
    /// Incoming edges per node
    incoming: Vec<Vec<EdgeId>>,
    /// All edges touching a node, in insertion order
    incident: Vec<Vec<EdgeId>>,
}

impl<N, E> AdjacencyGraph<N, E> {
    /// Creates a new empty graph.
    ///
    /// # Arguments
    ///
    /// * `directed` - Whether edges have a direction; fixed for the graph's lifetime
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0, 0)
    }

    /// Creates a new empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates a new empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates a new graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `directed` - Whether edges have a direction
    /// * `node_capacity` - Expected number of nodes
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(directed: bool, node_capacity: usize, edge_capacity: usize) -> Self {
        AdjacencyGraph {
            directed,
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
            incident: Vec::with_capacity(node_capacity),
        }
    }

    /// Returns `true` if edges have a direction.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds a new node with the given data and returns its id.
    ///
    /// Ids are assigned sequentially starting from 0.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.incident.push(Vec::new());
        id
    }

    /// Returns a reference to the data associated with the given node.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns a mutable reference to the data associated with the given node.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(node.index())
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all node identifiers, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns an iterator over all nodes with their identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId::new(i), data))
    }

    /// Returns an iterator over all edges as `(id, source, target, label)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId, &E)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e.source, e.target, &e.label))
    }

    /// Checks if the given node ID is valid for this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Checks if the given edge ID is valid for this graph.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.index() < self.edges.len()
    }

    /// Adds an edge between `source` and `target`, or relabels the existing one.
    ///
    /// On an undirected graph an existing edge in either orientation is
    /// relabeled. Self-loops are accepted.
    ///
    /// # Returns
    ///
    /// The id of the new or relabeled edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either endpoint does not exist.
    pub fn set_edge(&mut self, source: NodeId, target: NodeId, label: E) -> Result<EdgeId> {
        if !self.contains_node(source) {
            return Err(Error::GraphError(format!(
                "source node {} does not exist in graph with {} nodes",
                source,
                self.nodes.len()
            )));
        }
        if !self.contains_node(target) {
            return Err(Error::GraphError(format!(
                "target node {} does not exist in graph with {} nodes",
                target,
                self.nodes.len()
            )));
        }

        if let Some(existing) = self.find_edge(source, target) {
            self.edges[existing.index()].label = label;
            return Ok(existing);
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeData {
            source,
            target,
            label,
        });

        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);
        self.incident[source.index()].push(id);
        if source != target {
            self.incident[target.index()].push(id);
        }

        Ok(id)
    }

    /// Finds the edge joining `source` and `target`.
    ///
    /// Directed graphs only match `source -> target`; undirected graphs match
    /// either orientation. Out-of-range nodes yield `None`.
    #[must_use]
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        let outgoing = self.outgoing.get(source.index())?;
        if let Some(&id) = outgoing
            .iter()
            .find(|&&id| self.edges[id.index()].target == target)
        {
            return Some(id);
        }
        if self.directed {
            return None;
        }
        self.incoming
            .get(source.index())?
            .iter()
            .find(|&&id| self.edges[id.index()].source == target)
            .copied()
    }

    /// Returns the label of the given edge.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|e| &e.label)
    }

    /// Returns the endpoints of the given edge as `(source, target)`.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge.index()).map(|e| (e.source, e.target))
    }

    /// Returns the label of the edge joining `source` and `target`, if any.
    ///
    /// See [`find_edge`](Self::find_edge) for how direction is handled.
    #[must_use]
    pub fn edge_label(&self, source: NodeId, target: NodeId) -> Option<&E> {
        self.find_edge(source, target)
            .map(|id| &self.edges[id.index()].label)
    }

    /// Returns the number of edges touching `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.incident[node.index()].len()
    }

    /// Returns an iterator over the labels of every edge touching `node`, in
    /// insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.incident[node.index()]
            .iter()
            .map(|&id| (id, &self.edges[id.index()].label))
    }

    fn collect_neighbors(&self, node: NodeId) -> Vec<NodeId> {
        let mut around: Vec<NodeId> = Vec::with_capacity(self.incident[node.index()].len());
        for &id in &self.incident[node.index()] {
            let other = self.edges[id.index()].opposite(node);
            if !around.contains(&other) {
                around.push(other);
            }
        }
        around
    }
}

impl<N, E> GraphBase for AdjacencyGraph<N, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<N, E> Successors for AdjacencyGraph<N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        // Without direction every incident edge leads away from the node
        let targets: Vec<NodeId> = if self.directed {
            self.outgoing[node.index()]
                .iter()
                .map(|&id| self.edges[id.index()].target)
                .collect()
        } else {
            self.collect_neighbors(node)
        };
        targets.into_iter()
    }
}

impl<N, E> Neighbors for AdjacencyGraph<N, E> {
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.collect_neighbors(node).into_iter()
    }
}

impl<N, E> EdgeLabels for AdjacencyGraph<N, E> {
    type Label = E;

    fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&E> {
        self.edge_label(from, to)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        adjacency::AdjacencyGraph,
        edge::EdgeId,
        node::NodeId,
        traits::{EdgeLabels, GraphBase, Neighbors, Successors},
    };

    /// Creates an undirected chain: A - B - C
    fn create_chain() -> AdjacencyGraph<&'static str, &'static str> {
        let mut graph = AdjacencyGraph::undirected();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.set_edge(a, b, "e1").unwrap();
        graph.set_edge(b, c, "e2").unwrap();
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: AdjacencyGraph<(), ()> = AdjacencyGraph::undirected();
        assert!(graph.is_empty());
        assert!(!graph.is_directed());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);

        let directed: AdjacencyGraph<(), ()> = AdjacencyGraph::with_capacity(true, 10, 20);
        assert!(directed.is_directed());
        assert!(directed.is_empty());
    }

    #[test]
    fn test_add_node_and_access() {
        let mut graph: AdjacencyGraph<String, ()> = AdjacencyGraph::undirected();
        let a = graph.add_node("L1".to_string());
        assert_eq!(a, NodeId::new(0));

        if let Some(data) = graph.node_mut(a) {
            data.push_str("-bus");
        }
        assert_eq!(graph.node(a).map(String::as_str), Some("L1-bus"));
        assert_eq!(graph.node(NodeId::new(9)), None);
    }

    #[test]
    fn test_set_edge_invalid_endpoints() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::undirected();
        let a = graph.add_node(());

        let err = graph.set_edge(NodeId::new(99), a, ()).unwrap_err();
        assert!(err.to_string().contains("source node"));

        let err = graph.set_edge(a, NodeId::new(99), ()).unwrap_err();
        assert!(err.to_string().contains("target node"));
    }

    #[test]
    fn test_set_edge_relabels_existing_pair() {
        let mut graph = create_chain();
        let (a, b) = (NodeId::new(0), NodeId::new(1));

        // Reverse orientation hits the same undirected edge
        let id = graph.set_edge(b, a, "e1-renamed").unwrap();
        assert_eq!(id, EdgeId::new(0));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_label(a, b), Some(&"e1-renamed"));
    }

    #[test]
    fn test_directed_pairs_are_distinct() {
        let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::directed();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.set_edge(a, b, "forward").unwrap();
        graph.set_edge(b, a, "backward").unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_label(a, b), Some(&"forward"));
        assert_eq!(graph.edge_label(b, a), Some(&"backward"));

        // Both directions share one neighbor entry
        let around: Vec<NodeId> = graph.neighbors(a).collect();
        assert_eq!(around, vec![b]);
    }

    #[test]
    fn test_edge_lookup_undirected_either_way() {
        let graph = create_chain();
        let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));

        assert_eq!(graph.edge_between(a, b), Some(&"e1"));
        assert_eq!(graph.edge_between(b, a), Some(&"e1"));
        assert_eq!(graph.edge_between(c, b), Some(&"e2"));
        assert_eq!(graph.edge_between(a, c), None);
        assert_eq!(graph.edge_between(NodeId::new(42), a), None);
    }

    #[test]
    fn test_edge_lookup_directed_one_way() {
        let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::directed();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let id = graph.set_edge(a, b, "a->b").unwrap();

        assert_eq!(graph.edge(id), Some(&"a->b"));
        assert_eq!(graph.edge_endpoints(id), Some((a, b)));
        assert_eq!(graph.edge_label(a, b), Some(&"a->b"));
        assert_eq!(graph.edge_label(b, a), None);
        assert!(graph.contains_edge(id));
        assert!(!graph.contains_edge(EdgeId::new(5)));
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::undirected();
        let hub = graph.add_node(());
        let x = graph.add_node(());
        let y = graph.add_node(());
        let z = graph.add_node(());
        graph.set_edge(y, hub, ()).unwrap();
        graph.set_edge(hub, z, ()).unwrap();
        graph.set_edge(x, hub, ()).unwrap();

        let around: Vec<NodeId> = graph.neighbors(hub).collect();
        assert_eq!(around, vec![y, z, x]);
        assert_eq!(graph.degree(hub), 3);
    }

    #[test]
    fn test_successors_by_directedness() {
        let graph = create_chain();
        let b = NodeId::new(1);
        // Undirected: successors are the neighbors
        let succ: Vec<NodeId> = graph.successors(b).collect();
        assert_eq!(succ, vec![NodeId::new(0), NodeId::new(2)]);

        let mut directed: AdjacencyGraph<(), ()> = AdjacencyGraph::directed();
        let a = directed.add_node(());
        let b = directed.add_node(());
        directed.set_edge(a, b, ()).unwrap();
        assert_eq!(directed.successors(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(directed.successors(b).count(), 0);
        assert_eq!(directed.neighbors(b).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_self_loop() {
        let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::undirected();
        let a = graph.add_node(());
        graph.set_edge(a, a, "loop").unwrap();

        assert_eq!(graph.degree(a), 1);
        assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![a]);
        assert_eq!(graph.edge_label(a, a), Some(&"loop"));
    }

    #[test]
    fn test_incident_edges() {
        let graph = create_chain();
        let labels: Vec<&str> = graph
            .incident_edges(NodeId::new(1))
            .map(|(_, label)| *label)
            .collect();
        assert_eq!(labels, vec!["e1", "e2"]);
    }

    #[test]
    fn test_nodes_and_edges_iterators() {
        let graph = create_chain();
        let nodes: Vec<(NodeId, &&str)> = graph.nodes().collect();
        assert_eq!(nodes[2], (NodeId::new(2), &"C"));

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1].0, EdgeId::new(1));
        assert_eq!(*edges[1].3, "e2");
        assert_eq!(GraphBase::node_ids(&graph).count(), 3);
    }

    #[test]
    fn test_large_chain() {
        let mut graph: AdjacencyGraph<usize, usize> =
            AdjacencyGraph::with_capacity(false, 1000, 999);
        for i in 0..1000 {
            graph.add_node(i);
        }
        for i in 0..999 {
            graph
                .set_edge(NodeId::new(i), NodeId::new(i + 1), i)
                .unwrap();
        }

        assert_eq!(graph.node_count(), 1000);
        assert_eq!(graph.edge_count(), 999);
        assert_eq!(graph.degree(NodeId::new(0)), 1);
        assert_eq!(graph.degree(NodeId::new(500)), 2);
    }
}
