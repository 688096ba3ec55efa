use std::path::Path;

use anyhow::Context;
use gridwalk::scl::{SclDocument, SubstationTopology, TopologyConfig, VoltageLevel};

use crate::output::MISSING;

/// Load and parse an SCL file.
pub fn load_document(path: &Path) -> anyhow::Result<SclDocument> {
    SclDocument::from_file(path)
        .with_context(|| format!("failed to load SCL file: {}", path.display()))
}

/// Build the topology of a loaded document.
pub fn build_topology(doc: &SclDocument, config: TopologyConfig) -> anyhow::Result<SubstationTopology> {
    SubstationTopology::build(doc, config).context("failed to build substation topology")
}

/// Human-readable voltage of a level, e.g. `220 kV`.
pub fn format_voltage(level: &VoltageLevel) -> String {
    match &level.voltage {
        Some(voltage) => format!("{} {}{}", voltage.value, voltage.multiplier, voltage.unit),
        None => MISSING.to_string(),
    }
}
