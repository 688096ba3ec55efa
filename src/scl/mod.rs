//! IEC 61850 substation configuration (SCL) support.
//!
//! This module turns the `Substation` section of an SCL file into something
//! the graph algorithms can walk:
//!
//! - [`document`] parses the XML into an owned element tree ([`SclDocument`])
//! - [`topology`] builds the electrical graph and its [`EquipmentCatalog`]
//! - [`queries`] answers structural questions (buses, bays, IEDs, primary plant)
//! - [`identity`] computes the stable identifiers used as edge labels
//! - [`config`] holds the build and zone options
//!
//! # Examples
//!
//! ```rust,no_run
//! use gridwalk::scl::{SclDocument, SubstationTopology};
//! use std::path::Path;
//!
//! let doc = SclDocument::from_file(Path::new("station.scd"))?;
//! let topology = SubstationTopology::from_document(&doc)?;
//! println!(
//!     "{} nodes, {} pieces of equipment",
//!     topology.graph().node_count(),
//!     topology.catalog().len()
//! );
//! # Ok::<(), gridwalk::Error>(())
//! ```

pub mod config;
pub mod document;
pub mod equipment;
pub mod identity;
pub mod queries;
pub mod topology;

pub use config::{TopologyConfig, ZoneConfig, DEFAULT_MIN_PRIMARY_VOLTAGE};
pub use document::{
    Bay, ConductingEquipment, ConnectivityNode, LNode, PowerTransformer, SclDocument, Substation,
    Terminal, TransformerWinding, Voltage, VoltageLevel,
};
pub use equipment::{EquipmentCatalog, EquipmentClass, EquipmentKind, EquipmentRecord};
pub use topology::SubstationTopology;
