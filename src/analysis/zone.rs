//! Protection zones.
//!
//! A protection zone is the part of the network a protection function covers:
//! everything electrically reachable from a starting point without passing
//! through a boundary device (a circuit breaker unless configured otherwise).
//! The boundary devices themselves belong to the zone, since they are what
//! clears a fault inside it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gridwalk::analysis::{ProtectionZone, ZoneStart};
//! use gridwalk::scl::{SclDocument, SubstationTopology, ZoneConfig};
//! use std::path::Path;
//!
//! let doc = SclDocument::from_file(Path::new("station.scd"))?;
//! let topology = SubstationTopology::from_document(&doc)?;
//!
//! let start = ZoneStart::Transformer("T1".to_string());
//! let zone = ProtectionZone::from_start(&doc, &topology, &start, &ZoneConfig::default())?;
//! for breaker in zone.boundary() {
//!     println!("tripped by {}", breaker.name);
//! }
//! # Ok::<(), gridwalk::Error>(())
//! ```

use std::fmt;

use log::debug;
use rayon::prelude::*;

use crate::{
    graph::algorithms::boundary_equipment,
    scl::{queries, EquipmentRecord, SclDocument, SubstationTopology, ZoneConfig},
    Error, Result,
};

/// Where a zone search begins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ZoneStart {
    /// A connectivity node, by path name (`S1/220/Bus_A/L1`).
    ConnectivityNode(String),
    /// A power transformer, by name. The search starts at its first terminal.
    Transformer(String),
    /// A bus bar, by bay name. The search starts at the bus connectivity node.
    Bus(String),
    /// Conducting equipment, by name. The search starts at its first
    /// non-grounded terminal.
    Equipment(String),
}

impl ZoneStart {
    /// Resolves the start point to the key of a topology node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEquipment`] if no element has the name, or the
    /// element has no terminal to start from.
    pub fn resolve(&self, doc: &SclDocument) -> Result<String> {
        let node = match self {
            ZoneStart::ConnectivityNode(path) => return Ok(path.clone()),
            ZoneStart::Transformer(name) => doc
                .transformers()
                .find(|pt| &pt.name == name)
                .ok_or_else(|| Error::UnknownEquipment(format!("transformer {name}")))?
                .terminals()
                .find_map(|t| t.connectivity_node.clone()),
            ZoneStart::Bus(name) => queries::buses(doc)
                .into_iter()
                .find(|bus| bus.name() == name.as_str())
                .ok_or_else(|| Error::UnknownEquipment(format!("bus {name}")))?
                .connectivity_node()
                .map(|node| node.path_name.clone()),
            ZoneStart::Equipment(name) => doc
                .conducting_equipment()
                .find(|(_, _, ce)| &ce.name == name)
                .ok_or_else(|| Error::UnknownEquipment(format!("equipment {name}")))?
                .2
                .terminals
                .iter()
                .filter(|t| !t.is_grounded())
                .find_map(|t| t.connectivity_node.clone()),
        };

        node.ok_or_else(|| Error::UnknownEquipment(format!("{self} has no connectivity node")))
    }
}

impl fmt::Display for ZoneStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneStart::ConnectivityNode(path) => write!(f, "node {path}"),
            ZoneStart::Transformer(name) => write!(f, "transformer {name}"),
            ZoneStart::Bus(name) => write!(f, "bus {name}"),
            ZoneStart::Equipment(name) => write!(f, "equipment {name}"),
        }
    }
}

/// The result of a zone search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectionZone {
    start: String,
    nodes: Vec<String>,
    equipment: Vec<EquipmentRecord>,
    boundary: Vec<EquipmentRecord>,
}

impl ProtectionZone {
    /// Searches the zone around the topology node `start`.
    ///
    /// The walk stops behind every edge whose equipment has the configured
    /// boundary type. Edges without a catalog record never stop it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStartNode`] if `start` is not a node of the
    /// topology.
    pub fn around(topology: &SubstationTopology, start: &str, config: &ZoneConfig) -> Result<Self> {
        let catalog = topology.catalog();
        let is_boundary = |label: &String| catalog.is_type(label, &config.boundary_type);

        let graph = topology.graph();
        let result = graph.bounded_reach_from([start], is_boundary)?;

        let nodes = graph
            .map_nodes_to_keys(result.order())
            .into_iter()
            .cloned()
            .collect();
        let equipment: Vec<EquipmentRecord> = graph
            .traversed_edges(&result)
            .into_iter()
            .filter_map(|label| catalog.get(label))
            .cloned()
            .collect();
        let boundary = boundary_equipment(&result, graph, is_boundary)
            .into_iter()
            .filter_map(|label| catalog.get(label))
            .cloned()
            .collect();

        let zone = ProtectionZone {
            start: start.to_string(),
            nodes,
            equipment,
            boundary,
        };
        debug!(
            "zone around {}: {} nodes, {} equipment, {} boundary",
            zone.start,
            zone.nodes.len(),
            zone.equipment.len(),
            zone.boundary.len()
        );
        Ok(zone)
    }

    /// Resolves `start` against `doc`, then searches the zone around it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEquipment`] if the start cannot be resolved,
    /// or [`Error::UnknownStartNode`] if it resolves to a node outside the
    /// topology.
    pub fn from_start(
        doc: &SclDocument,
        topology: &SubstationTopology,
        start: &ZoneStart,
        config: &ZoneConfig,
    ) -> Result<Self> {
        let node = start.resolve(doc)?;
        Self::around(topology, &node, config)
    }

    /// Searches the zones around many start nodes in parallel.
    ///
    /// Results are in the order of `starts`; a failing start does not affect
    /// the others.
    pub fn analyze_many<S>(topology: &SubstationTopology, starts: &[S], config: &ZoneConfig) -> Vec<Result<Self>>
    where
        S: AsRef<str> + Sync,
    {
        starts
            .par_iter()
            .map(|start| Self::around(topology, start.as_ref(), config))
            .collect()
    }

    /// The node the search started from.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Keys of the nodes inside the zone, in visit order, starting node first.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Equipment the search crossed, in visit order.
    #[must_use]
    pub fn equipment(&self) -> &[EquipmentRecord] {
        &self.equipment
    }

    /// Boundary devices that closed the zone, in visit order.
    #[must_use]
    pub fn boundary(&self) -> &[EquipmentRecord] {
        &self.boundary
    }

    /// Returns `true` if the node `key` lies inside the zone.
    #[must_use]
    pub fn contains_node(&self, key: &str) -> bool {
        self.nodes.iter().any(|node| node == key)
    }

    /// Returns `true` if the zone contains equipment with this identity.
    #[must_use]
    pub fn contains_equipment(&self, identity: &str) -> bool {
        self.equipment.iter().any(|record| record.identity == identity)
    }
}
