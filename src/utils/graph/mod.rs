//! Generic graph infrastructure for network topology analysis.
//!
//! This module provides the graph representation and traversal machinery the
//! substation layer is built on. Nothing in here knows about substations:
//! nodes are dense ids, edges carry an opaque label.
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`], [`EdgeId`], [`AdjacencyGraph`] and the keyed
//!   wrapper [`IndexedGraph`]
//! - **Traits**: [`GraphBase`], [`Successors`], [`Neighbors`] and
//!   [`EdgeLabels`] decouple algorithms from the concrete graph
//! - **Algorithms**: depth-first traversal with pruning, edge extraction and
//!   boundary search in [`algorithms`]
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Node and edge identifiers use newtype wrappers to prevent accidental mixing
//! of indices.
//!
//! ## Immutable During Traversal
//!
//! Graphs are built incrementally, then only read. Algorithms take `&G`, and
//! every piece of traversal state lives in the call that owns it, so any
//! number of traversals may run over one graph at the same time.
//!
//! ## Directedness Is a Graph Property
//!
//! Whether edges have a direction is fixed when the graph is created.
//! Traversals pick [`Successors`] or [`Neighbors`] from it.
//!
//! # Usage Examples
//!
//! ```rust
//! use gridwalk::graph::{AdjacencyGraph, algorithms};
//!
//! let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::undirected();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.set_edge(a, b, "e1")?;
//! graph.set_edge(b, c, "e2")?;
//!
//! let result = algorithms::reachable(&graph, &[c])?;
//! assert_eq!(result.order(), &[c, b, a]);
//! assert_eq!(result.parent(a), Some(b));
//! # Ok::<(), gridwalk::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All types in this module implement [`Send`] and [`Sync`] when their generic
//! parameters do.

mod adjacency;
mod edge;
mod indexed;
mod node;
mod traits;

pub mod algorithms;

pub use adjacency::AdjacencyGraph;
pub use edge::EdgeId;
pub use indexed::IndexedGraph;
pub use node::NodeId;
pub use traits::{EdgeLabels, GraphBase, Neighbors, Successors, Topology};
