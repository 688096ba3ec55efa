//! Electrical topology of a substation document.
//!
//! [`SubstationTopology`] is the undirected graph traversals run on. Nodes are
//! connectivity-node path names (plus one synthetic node per single-terminal
//! equipment, named by the equipment identity). Edges are equipment, labeled
//! with the equipment identity. An [`EquipmentCatalog`] built alongside
//! resolves labels back to the element they came from.
//!
//! # Construction Rules
//!
//! 1. Every terminal's connectivity node becomes a node.
//! 2. Conducting equipment with two connected terminals becomes an edge
//!    between the two nodes. With one connected terminal it becomes a
//!    synthetic node plus an edge to the terminal's node. Grounded terminals
//!    do not count when [`TopologyConfig::skip_grounded_terminals`] is set.
//! 3. A power transformer with exactly two terminals becomes an edge.
//! 4. A winding with a neutral point links its terminal's node to the
//!    neutral point's node; the edge is labeled with the neutral point
//!    identity.
//!
//! Edges are set, not added: a second piece of equipment between the same
//! pair of nodes replaces the first one's label.

use log::{debug, warn};

use crate::{
    graph::IndexedGraph,
    scl::{
        EquipmentCatalog, EquipmentClass, EquipmentRecord, PowerTransformer, SclDocument,
        TopologyConfig,
    },
    Result,
};

/// Type code recorded for power transformers.
pub const TRANSFORMER_TYPE: &str = "PTR";

/// The topology graph of one document, together with its equipment catalog.
#[derive(Debug, Clone)]
pub struct SubstationTopology {
    graph: IndexedGraph<String, String>,
    catalog: EquipmentCatalog,
    config: TopologyConfig,
}

impl SubstationTopology {
    /// Builds the topology of `doc` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`](crate::Error::GraphError) if an edge
    /// cannot be set.
    pub fn from_document(doc: &SclDocument) -> Result<Self> {
        Self::build(doc, TopologyConfig::default())
    }

    /// Builds the topology of `doc`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`](crate::Error::GraphError) if an edge
    /// cannot be set.
    pub fn build(doc: &SclDocument, config: TopologyConfig) -> Result<Self> {
        let mut builder = TopologyBuilder {
            topology: SubstationTopology {
                graph: IndexedGraph::undirected(),
                catalog: EquipmentCatalog::new(),
                config,
            },
        };

        builder.add_terminal_nodes(doc);
        builder.add_conducting_equipment(doc)?;
        if config.connect_transformers {
            builder.add_transformers(doc)?;
        }
        if config.connect_neutrals {
            builder.add_neutrals(doc)?;
        }

        let topology = builder.topology;
        debug!(
            "topology has {} nodes, {} edges, {} catalogued items",
            topology.graph.node_count(),
            topology.graph.edge_count(),
            topology.catalog.len()
        );
        Ok(topology)
    }

    /// The keyed graph.
    #[must_use]
    pub fn graph(&self) -> &IndexedGraph<String, String> {
        &self.graph
    }

    /// The catalog of every edge label.
    #[must_use]
    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    /// The configuration the topology was built with.
    #[must_use]
    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    /// Resolves an edge label to the equipment it stands for.
    #[must_use]
    pub fn equipment(&self, label: &str) -> Option<&EquipmentRecord> {
        self.catalog.get(label)
    }

    /// Returns `true` if `key` names a node of the graph.
    #[must_use]
    pub fn has_node(&self, key: &str) -> bool {
        self.graph.has_node(key)
    }

    /// The label of the edge joining two nodes.
    #[must_use]
    pub fn edge(&self, from: &str, to: &str) -> Option<&str> {
        self.graph.edge(from, to).map(String::as_str)
    }
}

struct TopologyBuilder {
    topology: SubstationTopology,
}

impl TopologyBuilder {
    fn add_terminal_nodes(&mut self, doc: &SclDocument) {
        for node in doc.terminals().filter_map(|t| t.connectivity_node.as_ref()) {
            self.topology.graph.add_node(node.clone());
        }
    }

    /// Sets an edge, warning when it replaces a different label.
    fn link(&mut self, from: &str, to: &str, label: &str) -> Result<()> {
        if let Some(previous) = self.topology.graph.edge(from, to) {
            if previous != label {
                warn!("{label} replaces {previous} between {from} and {to}");
            }
        }
        self.topology
            .graph
            .set_edge(from.to_string(), to.to_string(), label.to_string())?;
        Ok(())
    }

    fn add_conducting_equipment(&mut self, doc: &SclDocument) -> Result<()> {
        let skip_grounded = self.topology.config.skip_grounded_terminals;

        for (level, bay, ce) in doc.conducting_equipment() {
            let nodes: Vec<&str> = ce
                .terminals
                .iter()
                .filter(|t| !(skip_grounded && t.is_grounded()))
                .filter_map(|t| t.connectivity_node.as_deref())
                .collect();

            match nodes.as_slice() {
                [first, second] => self.link(first, second, &ce.identity)?,
                [only] => {
                    self.topology.graph.add_node(ce.identity.clone());
                    self.link(&ce.identity, only, &ce.identity)?;
                }
                [] => {
                    debug!("{} has no connected terminal", ce.identity);
                    continue;
                }
                _ => {
                    warn!(
                        "{} has {} connected terminals, not part of the topology",
                        ce.identity,
                        nodes.len()
                    );
                    continue;
                }
            }

            self.topology.catalog.insert(EquipmentRecord {
                identity: ce.identity.clone(),
                name: ce.name.clone(),
                class: EquipmentClass::Conducting,
                type_code: ce.type_code.clone(),
                kind: ce.kind,
                bay: Some(bay.name.clone()),
                voltage_level: Some(level.name.clone()),
                desc: ce.desc.clone(),
                connectivity_nodes: nodes.iter().map(ToString::to_string).collect(),
            });
        }
        Ok(())
    }

    fn add_transformers(&mut self, doc: &SclDocument) -> Result<()> {
        for transformer in doc.transformers() {
            let nodes: Vec<&str> = transformer
                .terminals()
                .filter_map(|t| t.connectivity_node.as_deref())
                .collect();

            let [first, second] = nodes.as_slice() else {
                debug!(
                    "{} has {} terminals, not linked",
                    transformer.identity,
                    nodes.len()
                );
                continue;
            };
            self.link(first, second, &transformer.identity)?;
            self.topology
                .catalog
                .insert(transformer_record(transformer, &nodes));
        }
        Ok(())
    }

    fn add_neutrals(&mut self, doc: &SclDocument) -> Result<()> {
        for transformer in doc.transformers() {
            for winding in &transformer.windings {
                let Some(neutral) = &winding.neutral_point else {
                    continue;
                };
                let terminal_node = winding
                    .terminals
                    .first()
                    .and_then(|t| t.connectivity_node.as_deref());
                let (Some(from), Some(to)) = (terminal_node, neutral.connectivity_node.as_deref())
                else {
                    warn!("{} has a neutral point that cannot be linked", winding.identity);
                    continue;
                };

                self.link(from, to, &neutral.identity)?;
                self.topology.catalog.insert(EquipmentRecord {
                    identity: neutral.identity.clone(),
                    name: neutral.name.clone().unwrap_or_else(|| "Neutral".to_string()),
                    class: EquipmentClass::Neutral,
                    type_code: String::new(),
                    kind: None,
                    bay: None,
                    voltage_level: None,
                    desc: None,
                    connectivity_nodes: vec![from.to_string(), to.to_string()],
                });
            }
        }
        Ok(())
    }
}

fn transformer_record(transformer: &PowerTransformer, nodes: &[&str]) -> EquipmentRecord {
    EquipmentRecord {
        identity: transformer.identity.clone(),
        name: transformer.name.clone(),
        class: EquipmentClass::Transformer,
        type_code: TRANSFORMER_TYPE.to_string(),
        kind: None,
        bay: None,
        voltage_level: None,
        desc: transformer.desc.clone(),
        connectivity_nodes: nodes.iter().map(ToString::to_string).collect(),
    }
}
