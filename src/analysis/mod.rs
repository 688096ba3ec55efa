//! Substation analysis built on the generic graph algorithms.
//!
//! This module combines a parsed [`SclDocument`](crate::scl::SclDocument), its
//! [`SubstationTopology`](crate::scl::SubstationTopology) and the traversal
//! engine in [`crate::graph::algorithms`] into answers about the plant.
//!
//! # Architecture
//!
//! - [`zone`] - Protection zones: bounded reach from a start point, closed by
//!   boundary equipment
//!
//! # Usage
//!
//! ```rust,no_run
//! use gridwalk::analysis::ProtectionZone;
//! use gridwalk::scl::{SclDocument, SubstationTopology, ZoneConfig};
//! use std::path::Path;
//!
//! let doc = SclDocument::from_file(Path::new("station.scd"))?;
//! let topology = SubstationTopology::from_document(&doc)?;
//!
//! // One zone per bus, computed in parallel
//! let starts: Vec<String> = gridwalk::scl::queries::buses(&doc)
//!     .iter()
//!     .filter_map(|bus| bus.connectivity_node())
//!     .map(|node| node.path_name.clone())
//!     .collect();
//! for zone in ProtectionZone::analyze_many(&topology, &starts, &ZoneConfig::default()) {
//!     let zone = zone?;
//!     println!("{}: {} breakers", zone.start(), zone.boundary().len());
//! }
//! # Ok::<(), gridwalk::Error>(())
//! ```

pub mod zone;

pub use zone::{ProtectionZone, ZoneStart};
