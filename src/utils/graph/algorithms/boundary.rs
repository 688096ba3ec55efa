//! Boundary-limited reachability.
//!
//! A protection zone extends from its starting point until it hits a
//! boundary device, typically a circuit breaker. In graph terms: walk
//! depth-first, and stop a branch at any node whose discovering edge carries a
//! boundary label. The node behind the boundary edge is still part of the
//! result, so the boundary device itself shows up among the traversed edges.

use crate::{
    graph::{
        algorithms::{edges_along_visit_order, traverse, TraversalOrder, TraversalResult, VisitControl},
        NodeId, Topology,
    },
    Result,
};

/// Walks `graph` from `starts`, pruning a branch at every node that was
/// reached through an edge for which `is_boundary_edge` holds.
///
/// Roots are never pruned: they have no discovering edge.
///
/// # Errors
///
/// Returns [`Error::UnknownStartNode`](crate::Error::UnknownStartNode) if any
/// start node is not in the graph.
///
/// # Examples
///
/// ```rust
/// use gridwalk::graph::{AdjacencyGraph, algorithms::bounded_reach};
///
/// // A --DS1-- B --CB1-- C --DS2-- D
/// let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::undirected();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// let d = graph.add_node(());
/// graph.set_edge(a, b, "DS1")?;
/// graph.set_edge(b, c, "CB1")?;
/// graph.set_edge(c, d, "DS2")?;
///
/// let zone = bounded_reach(&graph, &[a], |label| label.starts_with("CB"))?;
/// assert_eq!(zone.order(), &[a, b, c]);
/// assert!(!zone.contains(d));
/// # Ok::<(), gridwalk::Error>(())
/// ```
pub fn bounded_reach<G, P>(graph: &G, starts: &[NodeId], mut is_boundary_edge: P) -> Result<TraversalResult>
where
    G: Topology,
    P: FnMut(&G::Label) -> bool,
{
    traverse(graph, starts, TraversalOrder::PreOrder, |visit| {
        let Some(parent) = visit.parent() else {
            return VisitControl::Continue;
        };
        match visit.graph().edge_between(parent, visit.node()) {
            Some(label) if is_boundary_edge(label) => VisitControl::PruneBranch,
            _ => VisitControl::Continue,
        }
    })
}

/// Returns the labels of traversed edges that satisfy `is_boundary`, in visit
/// order.
///
/// Applied to the result of [`bounded_reach`] with the same predicate, this
/// lists the boundary devices that closed the zone.
pub fn boundary_equipment<'g, G, P>(result: &TraversalResult, graph: &'g G, mut is_boundary: P) -> Vec<&'g G::Label>
where
    G: Topology,
    P: FnMut(&G::Label) -> bool,
{
    edges_along_visit_order(result, graph)
        .into_iter()
        .filter(|label| is_boundary(*label))
        .collect()
}
