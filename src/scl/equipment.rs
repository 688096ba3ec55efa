//! Primary equipment classification and lookup.
//!
//! [`EquipmentKind`] enumerates the IEC 61850-6 conducting equipment type
//! codes. [`EquipmentCatalog`] maps identities (the edge labels of a
//! topology graph) back to what they describe, which is how a traversal over
//! anonymous labels learns that it just crossed a circuit breaker.

use std::{collections::HashMap, fmt};

use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// IEC 61850-6 conducting equipment type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum EquipmentKind {
    /// Circuit breaker
    Cbr,
    /// Disconnector
    Dis,
    /// Voltage transformer
    Vtr,
    /// Current transformer
    Ctr,
    /// Generator
    Gen,
    /// Capacitor bank
    Cap,
    /// Reactor
    Rea,
    /// Converter
    Con,
    /// Motor
    Mot,
    /// Earth fault neutralizer
    Efn,
    /// Petersen coil
    Psh,
    /// Battery
    Bat,
    /// Bushing
    Bsh,
    /// Power cable
    Cab,
    /// Gas insulated line
    Gil,
    /// Power overhead line
    Lin,
    /// Neutral resistor
    Res,
    /// Rotating reactive component
    Rrc,
    /// Surge arrester
    Sar,
    /// Thyristor controlled frequency converter
    Tcf,
    /// Thyristor controlled reactive component
    Tcr,
    /// Infeeding line
    Ifl,
    /// Fan
    Fan,
    /// Saturable reactor
    Scr,
    /// Synchronous machine
    Smc,
    /// Pump
    Pmp,
}

impl EquipmentKind {
    /// The three-letter code used in the `type` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            EquipmentKind::Cbr => "CBR",
            EquipmentKind::Dis => "DIS",
            EquipmentKind::Vtr => "VTR",
            EquipmentKind::Ctr => "CTR",
            EquipmentKind::Gen => "GEN",
            EquipmentKind::Cap => "CAP",
            EquipmentKind::Rea => "REA",
            EquipmentKind::Con => "CON",
            EquipmentKind::Mot => "MOT",
            EquipmentKind::Efn => "EFN",
            EquipmentKind::Psh => "PSH",
            EquipmentKind::Bat => "BAT",
            EquipmentKind::Bsh => "BSH",
            EquipmentKind::Cab => "CAB",
            EquipmentKind::Gil => "GIL",
            EquipmentKind::Lin => "LIN",
            EquipmentKind::Res => "RES",
            EquipmentKind::Rrc => "RRC",
            EquipmentKind::Sar => "SAR",
            EquipmentKind::Tcf => "TCF",
            EquipmentKind::Tcr => "TCR",
            EquipmentKind::Ifl => "IFL",
            EquipmentKind::Fan => "FAN",
            EquipmentKind::Scr => "SCR",
            EquipmentKind::Smc => "SMC",
            EquipmentKind::Pmp => "PMP",
        }
    }

    /// Looks up a kind by its type code.
    ///
    /// Vendor-specific codes (conventionally starting with `E`) return `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        EquipmentKind::iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What an identity in the topology stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentClass {
    /// A `ConductingEquipment` element.
    Conducting,
    /// A `PowerTransformer` element.
    Transformer,
    /// The link between a transformer winding and its neutral point.
    Neutral,
}

/// Everything the topology knows about one edge label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentRecord {
    /// Full identity, also the edge label.
    pub identity: String,
    /// The element's own name.
    pub name: String,
    /// Element class.
    pub class: EquipmentClass,
    /// The raw `type` attribute (`PTR` for transformers, empty for neutral links).
    pub type_code: String,
    /// Parsed `type`, when it is a standard code.
    pub kind: Option<EquipmentKind>,
    /// Name of the enclosing bay, if any.
    pub bay: Option<String>,
    /// Name of the enclosing voltage level, if any.
    pub voltage_level: Option<String>,
    /// Free-text description.
    pub desc: Option<String>,
    /// Connectivity nodes the equipment joins, in terminal order.
    pub connectivity_nodes: Vec<String>,
}

impl EquipmentRecord {
    /// Returns `true` if this record's type code equals `code`.
    ///
    /// Comparison is on the raw code, so vendor-specific codes can be boundaries too.
    #[must_use]
    pub fn is_type(&self, code: &str) -> bool {
        self.type_code == code
    }
}

/// Identity-keyed lookup of every piece of equipment that became an edge.
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    records: Vec<EquipmentRecord>,
    by_identity: HashMap<String, usize>,
    by_name: HashMap<String, Vec<usize>>,
}

impl EquipmentCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record. A record with the same identity is replaced.
    pub fn insert(&mut self, record: EquipmentRecord) {
        if let Some(&index) = self.by_identity.get(&record.identity) {
            self.records[index] = record;
            return;
        }

        let index = self.records.len();
        self.by_identity.insert(record.identity.clone(), index);
        self.by_name
            .entry(record.name.clone())
            .or_default()
            .push(index);
        self.records.push(record);
    }

    /// Resolves an identity (edge label) to its record.
    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&EquipmentRecord> {
        self.by_identity
            .get(identity)
            .map(|&index| &self.records[index])
    }

    /// All records whose own name is `name`, in registration order.
    ///
    /// Names are only unique within a bay, so more than one record may match.
    pub fn by_name<'c>(&'c self, name: &str) -> impl Iterator<Item = &'c EquipmentRecord> + 'c {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .map(|&index| &self.records[index])
    }

    /// Returns `true` if `identity` resolves to equipment of type `code`.
    #[must_use]
    pub fn is_type(&self, identity: &str, code: &str) -> bool {
        self.get(identity).is_some_and(|record| record.is_type(code))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &EquipmentRecord> + '_ {
        self.records.iter()
    }
}
