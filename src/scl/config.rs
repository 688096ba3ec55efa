//! Topology and zone configuration
//!
//! This module provides the knobs that decide which parts of a substation
//! document become graph edges and where a protection zone ends.

use crate::scl::EquipmentKind;

/// Voltage (in volts) at or above which equipment counts as primary plant
/// for [`primary_equipment`](crate::scl::queries::primary_equipment).
pub const DEFAULT_MIN_PRIMARY_VOLTAGE: f64 = 50_000.0;

/// Configuration for building a topology graph from a substation document
///
/// Conducting equipment always becomes edges. The options below control the
/// links that are not plain two-terminal equipment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TopologyConfig {
    /// Ignore terminals whose `cNodeName` is `grounded` (recommended: always true)
    /// An earthing switch then becomes a single-terminal spur instead of a link to ground
    pub skip_grounded_terminals: bool,

    /// Link each transformer winding terminal to its neutral point's connectivity node
    pub connect_neutrals: bool,

    /// Add an edge for every power transformer with exactly two terminals
    pub connect_transformers: bool,

    /// Minimum voltage level for primary equipment selection, in volts (default: 50 kV)
    pub min_primary_voltage: f64,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            skip_grounded_terminals: true,
            connect_neutrals: true,
            connect_transformers: true,
            min_primary_voltage: DEFAULT_MIN_PRIMARY_VOLTAGE,
        }
    }
}

impl TopologyConfig {
    /// Creates a configuration that only links conducting equipment
    ///
    /// Transformers and neutral points stay disconnected, so zones never
    /// cross a voltage level.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            skip_grounded_terminals: true,
            connect_neutrals: false,
            connect_transformers: false,
            min_primary_voltage: DEFAULT_MIN_PRIMARY_VOLTAGE,
        }
    }

    /// Creates a configuration that links everything the document describes
    #[must_use]
    pub fn comprehensive() -> Self {
        Self::default()
    }

    /// Returns a copy with a different primary voltage threshold
    #[must_use]
    pub fn with_min_primary_voltage(mut self, volts: f64) -> Self {
        self.min_primary_voltage = volts;
        self
    }
}

/// Configuration for a protection zone search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneConfig {
    /// Equipment type code that closes a zone (default: `CBR`)
    pub boundary_type: String,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self::bounded_by(EquipmentKind::Cbr)
    }
}

impl ZoneConfig {
    /// A zone closed by equipment of the given standard kind
    #[must_use]
    pub fn bounded_by(kind: EquipmentKind) -> Self {
        Self {
            boundary_type: kind.code().to_string(),
        }
    }

    /// A zone closed by equipment with the given raw type code
    #[must_use]
    pub fn bounded_by_code(code: impl Into<String>) -> Self {
        Self {
            boundary_type: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_config_presets() {
        let minimal = TopologyConfig::minimal();
        assert!(minimal.skip_grounded_terminals);
        assert!(!minimal.connect_neutrals);
        assert!(!minimal.connect_transformers);

        let comprehensive = TopologyConfig::comprehensive();
        assert!(comprehensive.skip_grounded_terminals);
        assert!(comprehensive.connect_neutrals);
        assert!(comprehensive.connect_transformers);
        assert_eq!(comprehensive.min_primary_voltage, 50_000.0);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(TopologyConfig::default(), TopologyConfig::comprehensive());
        assert_eq!(
            TopologyConfig::default()
                .with_min_primary_voltage(110_000.0)
                .min_primary_voltage,
            110_000.0
        );
    }

    #[test]
    fn test_zone_config() {
        assert_eq!(ZoneConfig::default().boundary_type, "CBR");
        assert_eq!(ZoneConfig::bounded_by(EquipmentKind::Dis).boundary_type, "DIS");
        assert_eq!(ZoneConfig::bounded_by_code("EXY").boundary_type, "EXY");
    }
}
