//! # gridwalk Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the gridwalk library. Import this module to get quick access to the essential
//! types for topology traversal and substation analysis.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all gridwalk operations
pub use crate::Error;

/// The result type used throughout gridwalk
pub use crate::Result;

// ================================================================================================
// Graphs and Traversal
// ================================================================================================

/// Graph storage and identifiers
pub use crate::graph::{AdjacencyGraph, EdgeId, IndexedGraph, NodeId};

/// Graph traits the algorithms are written against
pub use crate::graph::{EdgeLabels, GraphBase, Neighbors, Successors, Topology};

/// Traversal engine, edge extraction and boundary search
pub use crate::graph::algorithms::{
    boundary_equipment, bounded_reach, edges_along_branch, edges_along_visit_order, reachable,
    traverse, TraversalOrder, TraversalResult, Visit, VisitControl,
};

// ================================================================================================
// Substation Documents
// ================================================================================================

/// Document model and topology
pub use crate::scl::{
    EquipmentCatalog, EquipmentClass, EquipmentKind, EquipmentRecord, SclDocument,
    SubstationTopology, TopologyConfig, ZoneConfig,
};

/// Document queries
pub use crate::scl::queries::{
    bays_with_terminal, buses, connected_bays, connected_ieds, lnodes_in_bays, primary_equipment,
    PrimaryCategory,
};

// ================================================================================================
// Analysis
// ================================================================================================

/// Protection zones
pub use crate::analysis::{ProtectionZone, ZoneStart};
