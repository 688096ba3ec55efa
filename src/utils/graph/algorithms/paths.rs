//! Edge extraction along traversal results.
//!
//! A [`TraversalResult`] names nodes; questions about a substation zone are
//! usually about the equipment in between. The functions here turn the
//! parent map of a finished walk back into the labels of the edges that were
//! actually followed.

use crate::graph::{algorithms::TraversalResult, EdgeLabels, NodeId};

/// One tree edge of a finished traversal: the step from `parent` to `child`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeStep<'g, L> {
    /// The node the step was taken from.
    pub parent: NodeId,
    /// The node the step discovered.
    pub child: NodeId,
    /// The label of the edge joining them.
    pub label: &'g L,
}

/// Returns the tree edges of `result`, one per non-root visited node, in
/// visit order.
///
/// The edge for a node is looked up between its parent and the node itself
/// (parent first, the direction in which it was traversed). Nodes without a
/// parent contribute nothing, as do pairs the graph has no edge for.
pub fn edge_steps<'g, G>(result: &TraversalResult, graph: &'g G) -> Vec<EdgeStep<'g, G::Label>>
where
    G: EdgeLabels,
{
    result
        .order()
        .iter()
        .filter_map(|&child| {
            let parent = result.parent(child)?;
            let label = graph.edge_between(parent, child)?;
            Some(EdgeStep {
                parent,
                child,
                label,
            })
        })
        .collect()
}

/// Returns the labels of the edges the traversal followed, in visit order.
///
/// Element `i` is the label of the edge that discovered the `i`-th non-root
/// node of the visit order. The root never contributes.
///
/// # Examples
///
/// ```rust
/// use gridwalk::graph::{AdjacencyGraph, algorithms::{edges_along_visit_order, reachable}};
///
/// let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::undirected();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.set_edge(a, b, "e1")?;
/// graph.set_edge(b, c, "e2")?;
///
/// let result = reachable(&graph, &[a])?;
/// assert_eq!(edges_along_visit_order(&result, &graph), vec![&"e1", &"e2"]);
/// # Ok::<(), gridwalk::Error>(())
/// ```
pub fn edges_along_visit_order<'g, G>(result: &TraversalResult, graph: &'g G) -> Vec<&'g G::Label>
where
    G: EdgeLabels,
{
    edge_steps(result, graph)
        .into_iter()
        .map(|step| step.label)
        .collect()
}

/// Returns the labels along the branch from the root that discovered `node`
/// down to `node`, root side first.
///
/// Empty if `node` is a root or was not visited.
pub fn edges_along_branch<'g, G>(
    result: &TraversalResult,
    graph: &'g G,
    node: NodeId,
) -> Vec<&'g G::Label>
where
    G: EdgeLabels,
{
    result
        .branch(node)
        .windows(2)
        .filter_map(|pair| graph.edge_between(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::{
            edge_steps, edges_along_branch, edges_along_visit_order, reachable, traverse,
            TraversalOrder, VisitControl,
        },
        AdjacencyGraph, NodeId,
    };

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
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

    #[test]
    fn test_triangle_edges_follow_tree() {
        let graph = create_triangle();
        let result = reachable(&graph, &[n(0)]).unwrap();

        // "ca" closes the cycle and is never a tree edge
        assert_eq!(edges_along_visit_order(&result, &graph), vec![&"ab", &"bc"]);
    }

    #[test]
    fn test_edges_align_with_non_root_nodes() {
        let graph = create_triangle();
        let result = reachable(&graph, &[n(2)]).unwrap();
        let steps = edge_steps(&result, &graph);

        assert_eq!(steps.len(), result.len() - 1);
        for (step, &child) in steps.iter().zip(&result.order()[1..]) {
            assert_eq!(step.child, child);
            assert_eq!(Some(step.parent), result.parent(child));
        }
    }

    #[test]
    fn test_single_node_has_no_edges() {
        let graph = create_triangle();
        let result = traverse(&graph, &[n(0)], TraversalOrder::PreOrder, |_| {
            VisitControl::PruneBranch
        })
        .unwrap();

        assert_eq!(result.order(), &[n(0)]);
        assert!(edges_along_visit_order(&result, &graph).is_empty());
    }

    #[test]
    fn test_multiple_roots_skip_root_edges() {
        let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.set_edge(a, b, "ab").unwrap();
        graph.set_edge(c, d, "cd").unwrap();

        let result = reachable(&graph, &[a, c]).unwrap();
        assert_eq!(edges_along_visit_order(&result, &graph), vec![&"ab", &"cd"]);
    }

    #[test]
    fn test_directed_lookup_uses_traversal_direction() {
        let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::directed();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.set_edge(a, b, "forward").unwrap();

        let result = reachable(&graph, &[a]).unwrap();
        assert_eq!(edges_along_visit_order(&result, &graph), vec![&"forward"]);
    }

    #[test]
    fn test_edges_along_branch() {
        let mut graph: AdjacencyGraph<(), &str> = AdjacencyGraph::undirected();
        for _ in 0..4 {
            graph.add_node(());
        }
        graph.set_edge(n(0), n(1), "01").unwrap();
        graph.set_edge(n(1), n(2), "12").unwrap();
        graph.set_edge(n(0), n(3), "03").unwrap();

        let result = reachable(&graph, &[n(0)]).unwrap();
        assert_eq!(edges_along_branch(&result, &graph, n(2)), vec![&"01", &"12"]);
        assert_eq!(edges_along_branch(&result, &graph, n(3)), vec![&"03"]);
        assert!(edges_along_branch(&result, &graph, n(0)).is_empty());
    }
}
