//! Graph algorithms for network topology analysis.
//!
//! Every algorithm here is written against the traits in
//! [`crate::graph`], so it runs on [`AdjacencyGraph`](crate::graph::AdjacencyGraph),
//! [`IndexedGraph`](crate::graph::IndexedGraph) or any other graph implementing them.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`traverse`] - Depth-first walk with a per-node prune decision
//! - [`reachable`] - Depth-first walk without pruning
//!
//! ## Path Extraction
//!
//! - [`edges_along_visit_order`] - Labels of the tree edges of a walk
//! - [`edges_along_branch`] - Labels from a root down to one node
//! - [`edge_steps`] - Tree edges with both endpoints
//!
//! ## Boundary Search
//!
//! - [`bounded_reach`] - Walk that stops behind boundary edges
//! - [`boundary_equipment`] - The boundary edges that closed a walk
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | Traversal | O(V + E) | Reachability, custom pruning |
//! | Path extraction | O(V) lookups | Equipment along a walk |
//! | Boundary search | O(V + E) | Protection zones |
//!
//! # Examples
//!
//! ```rust
//! use gridwalk::graph::{AdjacencyGraph, algorithms};
//!
//! // bus --DS1-- n1 --CB1-- n2
//! let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::undirected();
//! let bus = graph.add_node("bus");
//! let n1 = graph.add_node("n1");
//! let n2 = graph.add_node("n2");
//! graph.set_edge(bus, n1, "DS1")?;
//! graph.set_edge(n1, n2, "CB1")?;
//!
//! let zone = algorithms::bounded_reach(&graph, &[bus], |label| *label == "CB1")?;
//! let equipment = algorithms::edges_along_visit_order(&zone, &graph);
//! assert_eq!(equipment, vec![&"DS1", &"CB1"]);
//! # Ok::<(), gridwalk::Error>(())
//! ```

mod boundary;
mod paths;
mod traversal;

pub use boundary::{boundary_equipment, bounded_reach};
pub use paths::{edge_steps, edges_along_branch, edges_along_visit_order, EdgeStep};
pub use traversal::{
    reachable, traverse, Navigation, ParentMap, TraversalOrder, TraversalResult, Visit,
    VisitControl,
};
