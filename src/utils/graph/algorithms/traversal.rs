//! Depth-first traversal with per-branch pruning.
//!
//! This module provides the traversal engine every reachability question is
//! answered with. A walk starts from one or more roots, visits nodes in
//! pre-order, and asks a caller-supplied visitor after each newly visited
//! node whether the branch should continue past it.
//!
//! # Semantics
//!
//! - Start nodes are processed in the order given. A start node already
//!   reached from an earlier root is skipped.
//! - Directed graphs are navigated through [`Successors`], undirected graphs
//!   through [`Neighbors`]. The choice is made once per call.
//! - When the visitor answers [`VisitControl::PruneBranch`], the node stays in
//!   the visit order but its neighbors are not expanded from it. Pruning is
//!   strictly local: sibling branches and later roots are unaffected, and a
//!   neighbor of a pruned node may still be reached along another branch.
//! - A node's parent is the node that first discovered it. Roots have no
//!   parent, and a parent entry is never overwritten.
//!
//! # Iterative Formulation
//!
//! The walk keeps an explicit stack of `(node, pending neighbors, cursor)`
//! frames, so depth is bounded by memory and not by the call stack. The
//! visit, prune and parent-assignment order is exactly that of the classic
//! recursive formulation.
//!
//! # Limitations
//!
//! Only pre-order visiting is defined. Requesting [`TraversalOrder::PostOrder`]
//! returns [`Error::NotImplemented`]. There is no way to abort a whole walk
//! early other than pruning every branch.

use log::debug;

use crate::{
    graph::{GraphBase, Neighbors, NodeId, Successors},
    Error, Result,
};

/// Decision returned by a traversal visitor for the node just visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitControl {
    /// Expand this node's neighbors.
    Continue,
    /// Do not expand past this node along the current branch.
    PruneBranch,
}

/// When nodes are reported relative to their descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// A node is reported before any of its descendants.
    #[default]
    PreOrder,
    /// A node is reported after its descendants. Not implemented.
    PostOrder,
}

/// How the traversal moves from a node to the next ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Follow edge direction.
    Successors,
    /// Ignore edge direction.
    Neighbors,
}

impl Navigation {
    /// Selects the navigation matching the graph's directedness.
    #[must_use]
    pub fn for_graph<G: GraphBase>(graph: &G) -> Self {
        if graph.is_directed() {
            Navigation::Successors
        } else {
            Navigation::Neighbors
        }
    }

    /// Returns the nodes adjacent to `node` under this navigation, in the
    /// order the graph reports them.
    pub fn adjacent<G>(self, graph: &G, node: NodeId) -> Vec<NodeId>
    where
        G: Successors + Neighbors,
    {
        match self {
            Navigation::Successors => graph.successors(node).collect(),
            Navigation::Neighbors => graph.neighbors(node).collect(),
        }
    }
}

/// Per-traversal record of which node first discovered each other node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentMap {
    parents: Vec<Option<NodeId>>,
    entries: usize,
}

impl ParentMap {
    fn with_node_count(node_count: usize) -> Self {
        ParentMap {
            parents: vec![None; node_count],
            entries: 0,
        }
    }

    /// Records `parent` as the discoverer of `child` unless one is already set.
    fn record(&mut self, child: NodeId, parent: NodeId) -> bool {
        let slot = &mut self.parents[child.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(parent);
        self.entries += 1;
        true
    }

    /// Returns the node that first discovered `node`.
    ///
    /// `None` for roots, for nodes the traversal never reached, and for ids
    /// outside the graph.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node.index()).copied().flatten()
    }

    /// Returns the number of parent entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Returns `true` if no node has a parent entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Returns an iterator over `(child, parent)` pairs, by ascending child id.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(i, parent)| parent.map(|p| (NodeId::new(i), p)))
    }

    /// Reconstructs the branch leading to `node`, root first.
    ///
    /// The returned path starts at the root whose walk discovered `node` and
    /// ends with `node` itself. A node without a parent yields `[node]`.
    #[must_use]
    pub fn branch(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            // Parent links always point to an earlier visit, so this terminates
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

/// The read-only view handed to a visitor right after a node was visited.
pub struct Visit<'t, G> {
    graph: &'t G,
    order: &'t [NodeId],
    parents: &'t ParentMap,
}

impl<'t, G> Visit<'t, G> {
    /// The graph being walked.
    #[must_use]
    pub fn graph(&self) -> &'t G {
        self.graph
    }

    /// The node just visited (the last entry of the visit order).
    #[must_use]
    pub fn node(&self) -> NodeId {
        // The visitor is only invoked after a push
        self.order[self.order.len() - 1]
    }

    /// The node that discovered the current node; `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parents.parent(self.node())
    }

    /// `true` if the current node is a traversal root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// The visit order so far, current node included.
    #[must_use]
    pub fn order(&self) -> &'t [NodeId] {
        self.order
    }

    /// The parent map so far.
    #[must_use]
    pub fn parents(&self) -> &'t ParentMap {
        self.parents
    }
}

/// The outcome of one traversal call: visit order plus parent map.
///
/// Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    order: Vec<NodeId>,
    parents: ParentMap,
    visited: Vec<bool>,
}

impl TraversalResult {
    /// Nodes in the order they were first visited.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// The parent map of the walk.
    #[must_use]
    pub fn parents(&self) -> &ParentMap {
        &self.parents
    }

    /// The node that first discovered `node`, if any.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.parent(node)
    }

    /// Returns `true` if the walk visited `node`.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.visited.get(node.index()).copied().unwrap_or(false)
    }

    /// Number of visited nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing was visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited nodes without a parent, in visit order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order
            .iter()
            .copied()
            .filter(|&node| self.parents.parent(node).is_none())
    }

    /// Reconstructs the branch from a root to `node`; empty if `node` was not visited.
    #[must_use]
    pub fn branch(&self, node: NodeId) -> Vec<NodeId> {
        if !self.contains(node) {
            return Vec::new();
        }
        self.parents.branch(node)
    }

    /// Consumes the result, returning the visit order and the parent map.
    #[must_use]
    pub fn into_parts(self) -> (Vec<NodeId>, ParentMap) {
        (self.order, self.parents)
    }
}

/// One pending expansion on the explicit DFS stack.
struct Frame {
    node: NodeId,
    pending: Vec<NodeId>,
    cursor: usize,
}

/// Mutable state owned by a single traversal call.
struct DfsState {
    visited: Vec<bool>,
    parents: ParentMap,
    order: Vec<NodeId>,
    stack: Vec<Frame>,
}

impl DfsState {
    fn new(node_count: usize) -> Self {
        DfsState {
            visited: vec![false; node_count],
            parents: ParentMap::with_node_count(node_count),
            order: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn enter<G, F>(&mut self, graph: &G, navigation: Navigation, node: NodeId, visitor: &mut F)
    where
        G: Successors + Neighbors,
        F: FnMut(&Visit<'_, G>) -> VisitControl,
    {
        self.visited[node.index()] = true;
        self.order.push(node);

        let control = visitor(&Visit {
            graph,
            order: &self.order,
            parents: &self.parents,
        });

        if control == VisitControl::Continue {
            self.stack.push(Frame {
                node,
                pending: navigation.adjacent(graph, node),
                cursor: 0,
            });
        }
    }

    fn walk_from<G, F>(&mut self, graph: &G, navigation: Navigation, root: NodeId, visitor: &mut F)
    where
        G: Successors + Neighbors,
        F: FnMut(&Visit<'_, G>) -> VisitControl,
    {
        if self.visited[root.index()] {
            return;
        }
        self.enter(graph, navigation, root, visitor);

        while let Some(frame) = self.stack.last_mut() {
            if frame.cursor == frame.pending.len() {
                self.stack.pop();
                continue;
            }
            let next = frame.pending[frame.cursor];
            frame.cursor += 1;
            let current = frame.node;

            if !self.visited[next.index()] {
                self.parents.record(next, current);
                self.enter(graph, navigation, next, visitor);
            }
        }
    }

    fn finish(self) -> TraversalResult {
        TraversalResult {
            order: self.order,
            parents: self.parents,
            visited: self.visited,
        }
    }
}

/// Walks `graph` depth-first from `starts`, consulting `visitor` at every
/// newly visited node.
///
/// # Arguments
///
/// * `graph` - The graph to traverse; never modified
/// * `starts` - Root nodes, processed in order
/// * `order` - Must be [`TraversalOrder::PreOrder`]
/// * `visitor` - Called once per visited node; decides whether to expand it
///
/// # Returns
///
/// The visit order and parent map of the walk.
///
/// # Errors
///
/// - [`Error::UnknownStartNode`] if any start node is not in the graph. The
///   check happens before anything is visited, and no partial result is
///   returned.
/// - [`Error::NotImplemented`] for [`TraversalOrder::PostOrder`].
///
/// # Complexity
///
/// - Time: O(V + E) plus the cost of the visitor
/// - Space: O(V) for per-node state, O(E) worst case for pending frames
///
/// # Examples
///
/// ```rust
/// use gridwalk::graph::{AdjacencyGraph, algorithms::{traverse, TraversalOrder, VisitControl}};
///
/// let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::undirected();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.set_edge(a, b, "e1")?;
/// graph.set_edge(b, c, "e2")?;
///
/// // Stop at B: C is never reached
/// let result = traverse(&graph, &[a], TraversalOrder::PreOrder, |visit| {
///     if visit.node() == b {
///         VisitControl::PruneBranch
///     } else {
///         VisitControl::Continue
///     }
/// })?;
///
/// assert_eq!(result.order(), &[a, b]);
/// assert_eq!(result.parent(b), Some(a));
/// assert!(!result.contains(c));
/// # Ok::<(), gridwalk::Error>(())
/// ```
pub fn traverse<G, F>(
    graph: &G,
    starts: &[NodeId],
    order: TraversalOrder,
    mut visitor: F,
) -> Result<TraversalResult>
where
    G: Successors + Neighbors,
    F: FnMut(&Visit<'_, G>) -> VisitControl,
{
    if order == TraversalOrder::PostOrder {
        return Err(Error::NotImplemented("post-order traversal"));
    }
    if let Some(missing) = starts.iter().find(|&&start| !graph.contains_node(start)) {
        return Err(Error::UnknownStartNode(missing.to_string()));
    }

    let navigation = Navigation::for_graph(graph);
    let mut state = DfsState::new(graph.node_count());
    for &root in starts {
        state.walk_from(graph, navigation, root, &mut visitor);
    }

    debug!(
        "dfs visited {} of {} nodes from {} start node(s)",
        state.order.len(),
        graph.node_count(),
        starts.len()
    );
    Ok(state.finish())
}

/// Walks every node reachable from `starts` without pruning.
///
/// # Errors
///
/// Returns [`Error::UnknownStartNode`] if any start node is not in the graph.
pub fn reachable<G>(graph: &G, starts: &[NodeId]) -> Result<TraversalResult>
where
    G: Successors + Neighbors,
{
    traverse(graph, starts, TraversalOrder::PreOrder, |_| VisitControl::Continue)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{
            algorithms::traversal::{reachable, traverse, TraversalOrder, VisitControl},
            AdjacencyGraph, NodeId,
        },
        Error,
    };

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    /// Undirected chain A - B - C - D with labels e1, e2, e3
    fn create_chain() -> AdjacencyGraph<&'static str, &'static str> {
        let mut graph = AdjacencyGraph::undirected();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        let d = graph.add_node("D");
        graph.set_edge(a, b, "e1").unwrap();
        graph.set_edge(b, c, "e2").unwrap();
        graph.set_edge(c, d, "e3").unwrap();
        graph
    }

    /// Undirected triangle A - B - C - A
    fn create_triangle() -> AdjacencyGraph<&'static str, &'static str> {
        let mut graph = AdjacencyGraph::undirected();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.set_edge(a, b, "ab").unwrap();
        graph.set_edge(b, c, "bc").unwrap();
        graph.set_edge(c, a, "ca").unwrap();
        graph
    }

    /// Undirected tree
    ///       A
    ///      / \
    ///     B   C
    ///    / \   \
    ///   D   E   F
    fn create_tree() -> AdjacencyGraph<&'static str, ()> {
        let mut graph = AdjacencyGraph::undirected();
        for name in ["A", "B", "C", "D", "E", "F"] {
            graph.add_node(name);
        }
        graph.set_edge(n(0), n(1), ()).unwrap();
        graph.set_edge(n(0), n(2), ()).unwrap();
        graph.set_edge(n(1), n(3), ()).unwrap();
        graph.set_edge(n(1), n(4), ()).unwrap();
        graph.set_edge(n(2), n(5), ()).unwrap();
        graph
    }

    #[test]
    fn test_chain_full_walk() {
        let graph = create_chain();
        let result = reachable(&graph, &[n(0)]).unwrap();

        assert_eq!(result.order(), &[n(0), n(1), n(2), n(3)]);
        assert_eq!(result.parent(n(0)), None);
        assert_eq!(result.parent(n(1)), Some(n(0)));
        assert_eq!(result.parent(n(3)), Some(n(2)));
        assert_eq!(result.parents().len(), 3);
    }

    #[test]
    fn test_prune_keeps_pruned_node() {
        let graph = create_chain();
        let result = traverse(&graph, &[n(0)], TraversalOrder::PreOrder, |visit| {
            if visit.node() == n(2) {
                VisitControl::PruneBranch
            } else {
                VisitControl::Continue
            }
        })
        .unwrap();

        assert_eq!(result.order(), &[n(0), n(1), n(2)]);
        assert!(result.contains(n(2)));
        assert!(!result.contains(n(3)));
        assert_eq!(result.parent(n(3)), None);
    }

    #[test]
    fn test_prune_is_local_to_branch() {
        let graph = create_tree();
        // Prune at B: D and E are cut off, C and F are not
        let result = traverse(&graph, &[n(0)], TraversalOrder::PreOrder, |visit| {
            if visit.node() == n(1) {
                VisitControl::PruneBranch
            } else {
                VisitControl::Continue
            }
        })
        .unwrap();

        assert_eq!(result.order(), &[n(0), n(1), n(2), n(5)]);
        assert!(!result.contains(n(3)));
        assert!(!result.contains(n(4)));
    }

    #[test]
    fn test_pruned_neighbor_reachable_through_other_branch() {
        // A - B - C and A - C: pruning at B does not hide C, which A reaches directly
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.set_edge(a, b, ()).unwrap();
        graph.set_edge(b, c, ()).unwrap();
        graph.set_edge(a, c, ()).unwrap();

        let result = traverse(&graph, &[a], TraversalOrder::PreOrder, |visit| {
            if visit.node() == b {
                VisitControl::PruneBranch
            } else {
                VisitControl::Continue
            }
        })
        .unwrap();

        assert_eq!(result.order(), &[a, b, c]);
        assert_eq!(result.parent(c), Some(a));
    }

    #[test]
    fn test_triangle_visits_each_node_once() {
        let graph = create_triangle();
        let result = reachable(&graph, &[n(0)]).unwrap();

        // neighbors(A) = [B, C]; B discovers C before A gets to it
        assert_eq!(result.order(), &[n(0), n(1), n(2)]);
        assert_eq!(result.parent(n(1)), Some(n(0)));
        assert_eq!(result.parent(n(2)), Some(n(1)));
        // The root never acquires a parent, even though C links back to it
        assert_eq!(result.parent(n(0)), None);
    }

    #[test]
    fn test_directed_graph_follows_successors() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::directed();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.set_edge(a, b, ()).unwrap();
        graph.set_edge(c, b, ()).unwrap();

        let from_a = reachable(&graph, &[a]).unwrap();
        assert_eq!(from_a.order(), &[a, b]);

        let from_b = reachable(&graph, &[b]).unwrap();
        assert_eq!(from_b.order(), &[b]);
    }

    #[test]
    fn test_multiple_roots() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.set_edge(a, b, ()).unwrap();
        graph.set_edge(c, d, ()).unwrap();

        // B is reached from A before its turn as a root comes up
        let result = reachable(&graph, &[a, b, c]).unwrap();
        assert_eq!(result.order(), &[a, b, c, d]);
        assert_eq!(result.roots().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(result.parent(b), Some(a));
        assert_eq!(result.parent(c), None);
    }

    #[test]
    fn test_prune_root_continues_with_next_start() {
        let graph = create_chain();
        let result = traverse(&graph, &[n(0), n(3)], TraversalOrder::PreOrder, |visit| {
            if visit.is_root() {
                VisitControl::PruneBranch
            } else {
                VisitControl::Continue
            }
        })
        .unwrap();

        assert_eq!(result.order(), &[n(0), n(3)]);
        assert!(result.parents().is_empty());
    }

    #[test]
    fn test_unknown_start_node() {
        let graph = create_chain();
        let mut calls = 0;
        let err = traverse(&graph, &[n(0), n(42)], TraversalOrder::PreOrder, |_| {
            calls += 1;
            VisitControl::Continue
        })
        .unwrap_err();

        assert!(matches!(err, Error::UnknownStartNode(ref id) if id == "n42"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_post_order_not_implemented() {
        let graph = create_chain();
        let err = traverse(&graph, &[n(0)], TraversalOrder::PostOrder, |_| {
            VisitControl::Continue
        })
        .unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
    }

    #[test]
    fn test_visitor_sees_growing_order() {
        let graph = create_chain();
        let mut seen: Vec<(usize, Option<NodeId>)> = Vec::new();
        traverse(&graph, &[n(0)], TraversalOrder::PreOrder, |visit| {
            assert_eq!(visit.order().last(), Some(&visit.node()));
            assert!(visit.graph().node(visit.node()).is_some());
            seen.push((visit.order().len(), visit.parent()));
            VisitControl::Continue
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![(1, None), (2, Some(n(0))), (3, Some(n(1))), (4, Some(n(2)))]
        );
    }

    #[test]
    fn test_branch_reconstruction() {
        let graph = create_tree();
        let result = reachable(&graph, &[n(0)]).unwrap();

        assert_eq!(result.branch(n(4)), vec![n(0), n(1), n(4)]);
        assert_eq!(result.branch(n(0)), vec![n(0)]);

        let partial = traverse(&graph, &[n(0)], TraversalOrder::PreOrder, |visit| {
            if visit.node() == n(1) {
                VisitControl::PruneBranch
            } else {
                VisitControl::Continue
            }
        })
        .unwrap();
        assert!(partial.branch(n(4)).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let graph = create_tree();
        let first = reachable(&graph, &[n(2), n(3)]).unwrap();
        let second = reachable(&graph, &[n(2), n(3)]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_loop_visited_once() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::undirected();
        let a = graph.add_node(());
        graph.set_edge(a, a, ()).unwrap();

        let result = reachable(&graph, &[a]).unwrap();
        assert_eq!(result.order(), &[a]);
        assert_eq!(result.parent(a), None);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::undirected();
        let count = 200_000;
        for _ in 0..count {
            graph.add_node(());
        }
        for i in 0..count - 1 {
            graph.set_edge(n(i), n(i + 1), ()).unwrap();
        }

        let result = reachable(&graph, &[n(0)]).unwrap();
        assert_eq!(result.len(), count);
        assert_eq!(result.parent(n(count - 1)), Some(n(count - 2)));
    }

    #[test]
    fn test_empty_start_list() {
        let graph = create_chain();
        let result = reachable(&graph, &[]).unwrap();
        assert!(result.is_empty());
        assert!(result.parents().is_empty());
    }

    #[test]
    fn test_into_parts() {
        let graph = create_chain();
        let (order, parents) = reachable(&graph, &[n(1)]).unwrap().into_parts();
        assert_eq!(order, vec![n(1), n(0), n(2), n(3)]);
        assert_eq!(
            parents.iter().collect::<Vec<_>>(),
            vec![(n(0), n(1)), (n(2), n(1)), (n(3), n(2))]
        );
    }
}
