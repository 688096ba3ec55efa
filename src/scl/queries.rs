//! Read-only questions about a substation document.
//!
//! These queries work on the element tree alone, no topology graph needed:
//! which bays are buses, which bays hang off a bus, which logical nodes and
//! IEDs serve a set of bays, and which primary plant is worth configuring.

use std::collections::HashSet;

use strum::{EnumCount, EnumIter};

use crate::scl::{Bay, ConductingEquipment, ConnectivityNode, LNode, SclDocument, TopologyConfig, VoltageLevel};

/// A bus bar: a bay whose name starts with `Bus` (case-insensitive).
#[derive(Debug, Clone, Copy)]
pub struct Bus<'d> {
    /// The voltage level holding the bus.
    pub level: &'d VoltageLevel,
    /// The bus bay.
    pub bay: &'d Bay,
}

impl<'d> Bus<'d> {
    /// The bus name (the bay name).
    #[must_use]
    pub fn name(&self) -> &'d str {
        &self.bay.name
    }

    /// The bus's connectivity node: the first one declared in the bay.
    #[must_use]
    pub fn connectivity_node(&self) -> Option<&'d ConnectivityNode> {
        self.bay.connectivity_nodes.first()
    }
}

/// Returns `true` if a bay with this name is a bus bar.
#[must_use]
pub fn is_bus_name(name: &str) -> bool {
    name.to_uppercase().starts_with("BUS")
}

/// All bus bars, in document order.
#[must_use]
pub fn buses(doc: &SclDocument) -> Vec<Bus<'_>> {
    doc.bays()
        .filter(|(_, bay)| is_bus_name(&bay.name))
        .map(|(level, bay)| Bus { level, bay })
        .collect()
}

/// Bays owning at least one terminal attached to the connectivity node
/// `path_name`.
///
/// The match is exact, so `S1/220/Bus_A/L1` does not select bays attached
/// to `S1/220/Bus_A/L10`.
#[must_use]
pub fn bays_with_terminal<'d>(doc: &'d SclDocument, path_name: &str) -> Vec<&'d Bay> {
    doc.bays()
        .map(|(_, bay)| bay)
        .filter(|bay| {
            bay.terminals()
                .any(|t| t.connectivity_node.as_deref() == Some(path_name))
        })
        .collect()
}

/// Bays attached to the bus bay called `bus_name`.
///
/// The bus bay itself is part of the result when its own equipment touches
/// the bus node. Unknown names and bays without connectivity nodes yield an
/// empty list.
#[must_use]
pub fn connected_bays<'d>(doc: &'d SclDocument, bus_name: &str) -> Vec<&'d Bay> {
    let Some(node) = doc
        .bay(bus_name)
        .and_then(|(_, bay)| bay.connectivity_nodes.first())
    else {
        return Vec::new();
    };
    bays_with_terminal(doc, &node.path_name)
}

/// Bays by name, in the order of `names`. Names without a bay are skipped.
#[must_use]
pub fn bays_by_name<'d, S: AsRef<str>>(doc: &'d SclDocument, names: &[S]) -> Vec<&'d Bay> {
    names
        .iter()
        .filter_map(|name| doc.bay(name.as_ref()).map(|(_, bay)| bay))
        .collect()
}

/// Logical nodes of the named bays, equipment and transformer nodes included.
///
/// With `ied_connected`, only logical nodes allocated to an IED are returned
/// (an `iedName` that is present, non-empty and not `None`).
#[must_use]
pub fn lnodes_in_bays<'d, S: AsRef<str>>(
    doc: &'d SclDocument,
    names: &[S],
    ied_connected: bool,
) -> Vec<&'d LNode> {
    bays_by_name(doc, names)
        .into_iter()
        .flat_map(Bay::all_lnodes)
        .filter(|lnode| !ied_connected || lnode.is_ied_connected())
        .collect()
}

/// Distinct IED names serving the named bays, in first-seen order.
#[must_use]
pub fn connected_ieds<S: AsRef<str>>(doc: &SclDocument, names: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    lnodes_in_bays(doc, names, true)
        .into_iter()
        .filter_map(|lnode| lnode.ied_name.as_deref())
        .filter(|name| seen.insert(*name))
        .map(ToString::to_string)
        .collect()
}

/// Groups of selectable primary plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum PrimaryCategory {
    /// Power transformers named `T...`
    Transformers,
    /// Infeeding lines (`IFL`)
    Lines,
    /// Capacitor banks (`CAP`) named `C...`
    CapacitorBanks,
    /// Bus bars
    Buses,
}

impl PrimaryCategory {
    /// Display title of the category.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            PrimaryCategory::Transformers => "Transformers",
            PrimaryCategory::Lines => "Transmission Circuits",
            PrimaryCategory::CapacitorBanks => "Capacitor Banks",
            PrimaryCategory::Buses => "Buses",
        }
    }
}

/// One selectable piece of primary plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryItem<'d> {
    /// Category of the item.
    pub category: PrimaryCategory,
    /// Element name.
    pub name: &'d str,
    /// Element identity.
    pub identity: &'d str,
    /// Whether secondary configuration can be generated for the item.
    ///
    /// Only transformers with at most two windings qualify.
    pub configurable: bool,
}

fn level_at_least(level: &VoltageLevel, min_volts: f64) -> bool {
    level
        .voltage
        .as_ref()
        .and_then(|voltage| voltage.volts())
        .is_some_and(|volts| volts >= min_volts)
}

fn equipment_items<'d, F>(
    doc: &'d SclDocument,
    category: PrimaryCategory,
    min_volts: f64,
    mut keep: F,
) -> Vec<PrimaryItem<'d>>
where
    F: FnMut(&ConductingEquipment) -> bool,
{
    doc.conducting_equipment()
        .filter(|(level, _, ce)| level_at_least(level, min_volts) && keep(ce))
        .map(|(_, _, ce)| PrimaryItem {
            category,
            name: &ce.name,
            identity: &ce.identity,
            configurable: false,
        })
        .collect()
}

/// Primary plant offered for secondary system configuration.
///
/// Items come grouped in [`PrimaryCategory`] order and sorted by name within
/// each group. Lines, capacitor banks and buses must sit in a voltage level
/// at or above [`TopologyConfig::min_primary_voltage`]; a level without a
/// usable voltage never qualifies.
#[must_use]
pub fn primary_equipment<'d>(doc: &'d SclDocument, config: &TopologyConfig) -> Vec<PrimaryItem<'d>> {
    let min_volts = config.min_primary_voltage;

    let mut transformers: Vec<PrimaryItem<'d>> = doc
        .transformers()
        .filter(|pt| pt.name.starts_with('T'))
        .map(|pt| PrimaryItem {
            category: PrimaryCategory::Transformers,
            name: &pt.name,
            identity: &pt.identity,
            configurable: pt.windings.len() <= 2,
        })
        .collect();

    let mut lines = equipment_items(doc, PrimaryCategory::Lines, min_volts, |ce| {
        ce.type_code == "IFL"
    });
    let mut capacitors = equipment_items(doc, PrimaryCategory::CapacitorBanks, min_volts, |ce| {
        ce.type_code == "CAP" && ce.name.starts_with('C')
    });

    let mut bus_items: Vec<PrimaryItem<'d>> = buses(doc)
        .into_iter()
        .filter(|bus| level_at_least(bus.level, min_volts))
        .map(|bus| PrimaryItem {
            category: PrimaryCategory::Buses,
            name: bus.name(),
            identity: &bus.bay.identity,
            configurable: false,
        })
        .collect();

    let mut items = Vec::new();
    for group in [&mut transformers, &mut lines, &mut capacitors, &mut bus_items] {
        group.sort_by(|a, b| a.name.cmp(b.name));
        items.append(group);
    }
    items
}
