// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # gridwalk
//!
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](LICENSE-APACHE)
//!
//! Bounded-reachability analysis for electrical substations. `gridwalk` reads
//! the single-line description of an IEC 61850 SCL file, turns it into a
//! topology graph, and walks that graph depth-first to find protection zones:
//! everything reachable from a start point without crossing a circuit breaker.
//!
//! ## Features
//!
//! - **Generic DFS engine** - Per-branch pruning, parent maps, directed and
//!   undirected graphs, no recursion limit
//! - **Edge extraction** - Recover the equipment a traversal crossed from its
//!   parent map
//! - **SCL parsing** - Substation, voltage level, bay, equipment, transformer
//!   and logical node elements via `quick-xml`
//! - **Protection zones** - Boundary search closed by configurable equipment
//!   types, with parallel batch analysis
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust,no_run
//! use gridwalk::prelude::*;
//! use std::path::Path;
//!
//! let doc = SclDocument::from_file(Path::new("tests/samples/substation.scd"))?;
//! let topology = SubstationTopology::from_document(&doc)?;
//!
//! let start = ZoneStart::Transformer("T1".to_string());
//! let zone = ProtectionZone::from_start(&doc, &topology, &start, &ZoneConfig::default())?;
//! println!("{} breakers close the zone", zone.boundary().len());
//! # Ok::<(), gridwalk::Error>(())
//! ```
//!
//! ### Plain Graphs
//!
//! The traversal engine does not know about substations. Any graph that
//! implements the traits in [`graph`] can be walked:
//!
//! ```rust
//! use gridwalk::graph::{AdjacencyGraph, algorithms::{edges_along_visit_order, traverse, TraversalOrder, VisitControl}};
//!
//! let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::undirected();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//! graph.set_edge(a, b, "e1")?;
//! graph.set_edge(b, c, "e2")?;
//! graph.set_edge(c, d, "e3")?;
//!
//! let result = traverse(&graph, &[a], TraversalOrder::PreOrder, |visit| {
//!     if visit.node() == c {
//!         VisitControl::PruneBranch
//!     } else {
//!         VisitControl::Continue
//!     }
//! })?;
//!
//! assert_eq!(result.order(), &[a, b, c]);
//! assert_eq!(edges_along_visit_order(&result, &graph), vec![&"e1", &"e2"]);
//! # Ok::<(), gridwalk::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Graph storage, traits and the traversal algorithms
//! - [`scl`] - SCL document model, topology construction and queries
//! - [`analysis`] - Protection zone analysis
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust,no_run
//! use gridwalk::{Error, scl::SclDocument};
//!
//! match SclDocument::from_file(std::path::Path::new("station.scd")) {
//!     Ok(doc) => println!("{} substations", doc.substations().len()),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed: {}", message),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run scl_document --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

#[macro_use]
pub(crate) mod error;
pub(crate) mod utils;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use gridwalk::prelude::*;
///
/// let doc = SclDocument::from_file("tests/samples/substation.scd".as_ref())?;
/// println!("{} buses", buses(&doc).len());
/// # Ok::<(), gridwalk::Error>(())
/// ```
pub mod prelude;

/// Graph storage, graph traits and traversal algorithms
///
/// # Key Types
///
/// - [`graph::AdjacencyGraph`] - Labeled graph with dense node and edge ids
/// - [`graph::IndexedGraph`] - Keyed wrapper resolving user keys to node ids
/// - [`graph::algorithms::traverse`] - Depth-first traversal with pruning
/// - [`graph::algorithms::bounded_reach`] - Traversal stopped at boundary edges
pub use utils::graph;

/// IEC 61850 SCL document model, topology construction and document queries
pub mod scl;

/// Protection zone analysis over substation topologies
pub mod analysis;

/// `gridwalk` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust,no_run
/// use gridwalk::{Result, scl::SclDocument};
///
/// fn load(path: &str) -> Result<SclDocument> {
///     SclDocument::from_file(std::path::Path::new(path))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `gridwalk` Error type
///
/// The main error type for all operations in this crate. Covers graph
/// traversal, document parsing and zone analysis failures.
pub use error::Error;
