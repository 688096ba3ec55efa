//! Substation section of an IEC 61850 SCL document.
//!
//! This module parses the single-line description of a substation (the
//! `Substation` element of an SSD or SCD file) into an owned, read-only
//! element tree. Everything outside the substation section (communication,
//! IEDs, data type templates) is skipped without being interpreted.
//!
//! # Element Tree
//!
//! ```text
//! SclDocument
//! └── Substation
//!     ├── PowerTransformer ── TransformerWinding ── Terminal, NeutralPoint
//!     └── VoltageLevel (Voltage)
//!         ├── PowerTransformer
//!         └── Bay
//!             ├── PowerTransformer
//!             ├── ConductingEquipment ── Terminal, LNode
//!             ├── ConnectivityNode
//!             └── LNode
//! ```
//!
//! Every named element carries its [identity](crate::scl::identity), computed
//! while parsing.
//!
//! # Examples
//!
//! ```rust
//! use gridwalk::scl::SclDocument;
//!
//! let doc = SclDocument::from_str(r#"
//!     <SCL xmlns="http://www.iec.ch/61850/2003/SCL">
//!       <Substation name="S1">
//!         <VoltageLevel name="220">
//!           <Voltage unit="V" multiplier="k">220</Voltage>
//!           <Bay name="Bus_A">
//!             <ConnectivityNode name="L1" pathName="S1/220/Bus_A/L1"/>
//!           </Bay>
//!         </VoltageLevel>
//!       </Substation>
//!     </SCL>"#)?;
//!
//! let level = &doc.substations()[0].voltage_levels[0];
//! assert_eq!(level.identity, "S1>220");
//! assert_eq!(level.voltage.as_ref().and_then(|v| v.volts()), Some(220_000.0));
//! # Ok::<(), gridwalk::Error>(())
//! ```

use std::{fs, path::Path, str::FromStr};

use log::{debug, warn};
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::{
    scl::{identity, EquipmentKind},
    Result,
};

/// A parsed SCL document, reduced to its substation sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SclDocument {
    substations: Vec<Substation>,
}

/// A `Substation` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Substation {
    /// Identity (equal to the name).
    pub identity: String,
    /// Substation name.
    pub name: String,
    /// Free-text description.
    pub desc: Option<String>,
    /// Transformers directly below the substation.
    pub transformers: Vec<PowerTransformer>,
    /// Voltage levels in document order.
    pub voltage_levels: Vec<VoltageLevel>,
}

/// A `VoltageLevel` element.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageLevel {
    /// Identity, `substation>name`.
    pub identity: String,
    /// Voltage level name.
    pub name: String,
    /// Free-text description.
    pub desc: Option<String>,
    /// Nominal voltage.
    pub voltage: Option<Voltage>,
    /// Transformers directly below the voltage level.
    pub transformers: Vec<PowerTransformer>,
    /// Bays in document order.
    pub bays: Vec<Bay>,
}

/// The `Voltage` child of a voltage level.
#[derive(Debug, Clone, PartialEq)]
pub struct Voltage {
    /// Numeric value as written.
    pub value: f64,
    /// SI multiplier code (`""`, `k`, `M`, ...).
    pub multiplier: String,
    /// Unit code, normally `V`.
    pub unit: String,
}

impl Voltage {
    /// Factor of an SI multiplier code.
    ///
    /// Returns `None` for codes outside the supported set.
    #[must_use]
    pub fn multiplier_factor(multiplier: &str) -> Option<f64> {
        match multiplier {
            "" => Some(1.0),
            "m" => Some(1e-3),
            "k" => Some(1e3),
            "M" => Some(1e6),
            "G" => Some(1e9),
            _ => None,
        }
    }

    /// The voltage in volts, or `None` if the multiplier is not understood.
    #[must_use]
    pub fn volts(&self) -> Option<f64> {
        Self::multiplier_factor(&self.multiplier).map(|factor| self.value * factor)
    }
}

/// A `Bay` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Bay {
    /// Identity, `substation>level>name`.
    pub identity: String,
    /// Bay name.
    pub name: String,
    /// Free-text description.
    pub desc: Option<String>,
    /// Transformers placed in the bay.
    pub transformers: Vec<PowerTransformer>,
    /// Conducting equipment in document order.
    pub equipment: Vec<ConductingEquipment>,
    /// Connectivity nodes in document order.
    pub connectivity_nodes: Vec<ConnectivityNode>,
    /// Logical nodes attached to the bay itself.
    pub lnodes: Vec<LNode>,
}

impl Bay {
    /// Every logical node in the bay: the bay's own, then those of its
    /// equipment and transformers.
    pub fn all_lnodes(&self) -> impl Iterator<Item = &LNode> + '_ {
        self.lnodes
            .iter()
            .chain(self.equipment.iter().flat_map(|ce| ce.lnodes.iter()))
            .chain(self.transformers.iter().flat_map(|pt| pt.lnodes.iter()))
    }

    /// Every terminal in the bay, equipment and transformer windings alike.
    pub fn terminals(&self) -> impl Iterator<Item = &Terminal> + '_ {
        self.transformers
            .iter()
            .flat_map(PowerTransformer::terminals)
            .chain(self.equipment.iter().flat_map(|ce| ce.terminals.iter()))
    }
}

/// A `ConnectivityNode` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityNode {
    /// Node name within the bay.
    pub name: String,
    /// Full path, e.g. `S1/220/Bus_A/L1`. Terminals refer to this.
    pub path_name: String,
}

/// A `ConductingEquipment` element.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductingEquipment {
    /// Identity, `substation>level>bay>name`.
    pub identity: String,
    /// Equipment name.
    pub name: String,
    /// Free-text description.
    pub desc: Option<String>,
    /// Raw `type` attribute.
    pub type_code: String,
    /// Parsed type, when `type_code` is a standard code.
    pub kind: Option<EquipmentKind>,
    /// Terminals in document order.
    pub terminals: Vec<Terminal>,
    /// Logical nodes attached to the equipment.
    pub lnodes: Vec<LNode>,
}

/// A `Terminal` or `NeutralPoint` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    /// Identity, `parent>connectivityNode`.
    pub identity: String,
    /// Terminal name.
    pub name: Option<String>,
    /// Path of the connectivity node this terminal attaches to.
    pub connectivity_node: Option<String>,
    /// Name of that connectivity node within its bay.
    pub cnode_name: Option<String>,
}

impl Terminal {
    /// Returns `true` for terminals connected to earth (`cNodeName="grounded"`).
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.cnode_name.as_deref() == Some("grounded")
    }
}

/// A `PowerTransformer` element.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerTransformer {
    /// Identity, `container>name`.
    pub identity: String,
    /// Transformer name.
    pub name: String,
    /// Free-text description.
    pub desc: Option<String>,
    /// Windings in document order.
    pub windings: Vec<TransformerWinding>,
    /// Logical nodes attached to the transformer.
    pub lnodes: Vec<LNode>,
}

impl PowerTransformer {
    /// Every winding terminal, in document order. Neutral points excluded.
    pub fn terminals(&self) -> impl Iterator<Item = &Terminal> + '_ {
        self.windings.iter().flat_map(|w| w.terminals.iter())
    }
}

/// A `TransformerWinding` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformerWinding {
    /// Identity, `transformer>name`.
    pub identity: String,
    /// Winding name.
    pub name: String,
    /// Terminals in document order.
    pub terminals: Vec<Terminal>,
    /// The winding's neutral point, if modeled.
    pub neutral_point: Option<Terminal>,
}

/// An `LNode` element: a logical node allocated to primary plant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LNode {
    /// Name of the IED hosting the function; `None` as text means unallocated.
    pub ied_name: Option<String>,
    /// Logical device instance.
    pub ld_inst: Option<String>,
    /// Logical node prefix.
    pub prefix: Option<String>,
    /// Logical node class (`XCBR`, `PDIS`, ...).
    pub ln_class: String,
    /// Logical node instance.
    pub ln_inst: Option<String>,
}

impl LNode {
    /// Returns `true` if the logical node is allocated to a real IED.
    #[must_use]
    pub fn is_ied_connected(&self) -> bool {
        matches!(self.ied_name.as_deref(), Some(name) if !name.is_empty() && name != "None")
    }
}

impl SclDocument {
    /// Parses a document from XML text.
    ///
    /// # Errors
    ///
    /// - [`Error::Xml`](crate::Error::Xml) / [`Error::XmlAttribute`](crate::Error::XmlAttribute)
    ///   if the text is not well-formed XML
    /// - [`Error::Malformed`](crate::Error::Malformed) if a substation element
    ///   lacks a required attribute or the document has no root element
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(xml: &str) -> Result<Self> {
        let document = SclParser::new(xml).document()?;
        debug!(
            "parsed {} substation(s), {} bay(s)",
            document.substations.len(),
            document.bays().count()
        );
        Ok(document)
    }

    /// Reads and parses a document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`](crate::Error::FileError) if the file cannot
    /// be read, otherwise the errors of [`SclDocument::from_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let xml = fs::read_to_string(path)?;
        Self::from_str(&xml)
    }

    /// Substations in document order.
    #[must_use]
    pub fn substations(&self) -> &[Substation] {
        &self.substations
    }

    /// All voltage levels, by substation.
    pub fn voltage_levels(&self) -> impl Iterator<Item = &VoltageLevel> + '_ {
        self.substations.iter().flat_map(|s| s.voltage_levels.iter())
    }

    /// All bays with their voltage level, in document order.
    pub fn bays(&self) -> impl Iterator<Item = (&VoltageLevel, &Bay)> + '_ {
        self.voltage_levels()
            .flat_map(|level| level.bays.iter().map(move |bay| (level, bay)))
    }

    /// The first bay called `name`.
    #[must_use]
    pub fn bay(&self, name: &str) -> Option<(&VoltageLevel, &Bay)> {
        self.bays().find(|(_, bay)| bay.name == name)
    }

    /// All power transformers: substation level first, then per voltage level
    /// and bay.
    pub fn transformers(&self) -> impl Iterator<Item = &PowerTransformer> + '_ {
        self.substations.iter().flat_map(|substation| {
            substation.transformers.iter().chain(
                substation.voltage_levels.iter().flat_map(|level| {
                    level
                        .transformers
                        .iter()
                        .chain(level.bays.iter().flat_map(|bay| bay.transformers.iter()))
                }),
            )
        })
    }

    /// All conducting equipment with the bay and voltage level containing it.
    pub fn conducting_equipment(
        &self,
    ) -> impl Iterator<Item = (&VoltageLevel, &Bay, &ConductingEquipment)> + '_ {
        self.bays()
            .flat_map(|(level, bay)| bay.equipment.iter().map(move |ce| (level, bay, ce)))
    }

    /// Every `Terminal` in the document: transformer terminals first, then
    /// equipment terminals. Neutral points are not terminals.
    pub fn terminals(&self) -> impl Iterator<Item = &Terminal> + '_ {
        self.transformers()
            .flat_map(PowerTransformer::terminals)
            .chain(
                self.conducting_equipment()
                    .flat_map(|(_, _, ce)| ce.terminals.iter()),
            )
    }
}

impl FromStr for SclDocument {
    type Err = crate::Error;

    fn from_str(xml: &str) -> Result<Self> {
        SclDocument::from_str(xml)
    }
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn required_attribute(element: &BytesStart<'_>, name: &str) -> Result<String> {
    attribute(element, name)?.ok_or_else(|| {
        malformed_error!(
            "<{}> is missing the required '{}' attribute",
            element_name(element),
            name
        )
    })
}

/// Pull parser over the substation section.
struct SclParser<'a> {
    reader: Reader<&'a [u8]>,
}

impl<'a> SclParser<'a> {
    fn new(xml: &'a str) -> Self {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        SclParser { reader }
    }

    fn document(mut self) -> Result<SclDocument> {
        let mut substations = Vec::new();
        let mut depth = 0usize;
        let mut saw_root = false;

        loop {
            match self.reader.read_event()? {
                Event::Start(element) => {
                    saw_root = true;
                    if depth == 1 && element.local_name().as_ref() == b"Substation" {
                        substations.push(self.substation(&element, true)?);
                    } else {
                        depth += 1;
                    }
                }
                Event::Empty(element) => {
                    saw_root = true;
                    if depth == 1 && element.local_name().as_ref() == b"Substation" {
                        substations.push(self.substation(&element, false)?);
                    }
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_root {
            return Err(malformed_error!("Document has no root element"));
        }
        if depth > 0 {
            return Err(malformed_error!("Document ends inside an open element"));
        }
        Ok(SclDocument { substations })
    }

    /// Feeds every child element of `element` to `on_child`.
    ///
    /// `on_child` must consume the child's content when the child is open.
    fn children<F>(&mut self, element: &BytesStart<'a>, open: bool, mut on_child: F) -> Result<()>
    where
        F: FnMut(&mut Self, &BytesStart<'a>, bool) -> Result<()>,
    {
        if !open {
            return Ok(());
        }

        loop {
            match self.reader.read_event()? {
                Event::Start(child) => on_child(self, &child, true)?,
                Event::Empty(child) => on_child(self, &child, false)?,
                Event::End(_) => return Ok(()),
                Event::Eof => {
                    return Err(malformed_error!(
                        "Unexpected end of document inside <{}>",
                        element_name(element)
                    ))
                }
                _ => {}
            }
        }
    }

    fn skip(&mut self, element: &BytesStart<'a>, open: bool) -> Result<()> {
        if open {
            self.reader.read_to_end(element.name())?;
        }
        Ok(())
    }

    fn text(&mut self, element: &BytesStart<'a>, open: bool) -> Result<String> {
        let mut text = String::new();
        if !open {
            return Ok(text);
        }

        loop {
            match self.reader.read_event()? {
                Event::Text(content) => text.push_str(&content.unescape()?),
                Event::CData(content) => text.push_str(&String::from_utf8_lossy(&content)),
                Event::Start(child) => {
                    self.reader.read_to_end(child.name())?;
                }
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(malformed_error!(
                        "Unexpected end of document inside <{}>",
                        element_name(element)
                    ))
                }
                _ => {}
            }
        }
    }

    fn substation(&mut self, element: &BytesStart<'a>, open: bool) -> Result<Substation> {
        let name = required_attribute(element, "name")?;
        let mut substation = Substation {
            identity: identity::named("", &name),
            name,
            desc: attribute(element, "desc")?,
            transformers: Vec::new(),
            voltage_levels: Vec::new(),
        };

        self.children(element, open, |parser, child, child_open| {
            match child.local_name().as_ref() {
                b"VoltageLevel" => {
                    let level = parser.voltage_level(child, child_open, &substation.identity)?;
                    substation.voltage_levels.push(level);
                }
                b"PowerTransformer" => {
                    let transformer =
                        parser.power_transformer(child, child_open, &substation.identity)?;
                    substation.transformers.push(transformer);
                }
                _ => parser.skip(child, child_open)?,
            }
            Ok(())
        })?;

        Ok(substation)
    }

    fn voltage_level(&mut self, element: &BytesStart<'a>, open: bool, parent: &str) -> Result<VoltageLevel> {
        let name = required_attribute(element, "name")?;
        let mut level = VoltageLevel {
            identity: identity::named(parent, &name),
            name,
            desc: attribute(element, "desc")?,
            voltage: None,
            transformers: Vec::new(),
            bays: Vec::new(),
        };

        self.children(element, open, |parser, child, child_open| {
            match child.local_name().as_ref() {
                b"Voltage" => level.voltage = parser.voltage(child, child_open, &level.identity)?,
                b"Bay" => {
                    let bay = parser.bay(child, child_open, &level.identity)?;
                    level.bays.push(bay);
                }
                b"PowerTransformer" => {
                    let transformer = parser.power_transformer(child, child_open, &level.identity)?;
                    level.transformers.push(transformer);
                }
                _ => parser.skip(child, child_open)?,
            }
            Ok(())
        })?;

        Ok(level)
    }

    /// Reads a `Voltage` element. A value that is not a number leaves the
    /// level without a voltage.
    fn voltage(&mut self, element: &BytesStart<'a>, open: bool, level: &str) -> Result<Option<Voltage>> {
        let multiplier = attribute(element, "multiplier")?.unwrap_or_default();
        let unit = attribute(element, "unit")?.unwrap_or_else(|| "V".to_string());
        let text = self.text(element, open)?;
        let Ok(value) = text.trim().parse::<f64>() else {
            warn!("{level} has an unusable voltage value '{}'", text.trim());
            return Ok(None);
        };

        Ok(Some(Voltage {
            value,
            multiplier,
            unit,
        }))
    }

    fn bay(&mut self, element: &BytesStart<'a>, open: bool, parent: &str) -> Result<Bay> {
        let name = required_attribute(element, "name")?;
        let mut bay = Bay {
            identity: identity::named(parent, &name),
            name,
            desc: attribute(element, "desc")?,
            transformers: Vec::new(),
            equipment: Vec::new(),
            connectivity_nodes: Vec::new(),
            lnodes: Vec::new(),
        };

        self.children(element, open, |parser, child, child_open| {
            match child.local_name().as_ref() {
                b"ConductingEquipment" => {
                    let equipment = parser.conducting_equipment(child, child_open, &bay.identity)?;
                    bay.equipment.push(equipment);
                }
                b"PowerTransformer" => {
                    let transformer = parser.power_transformer(child, child_open, &bay.identity)?;
                    bay.transformers.push(transformer);
                }
                b"ConnectivityNode" => {
                    bay.connectivity_nodes.push(ConnectivityNode {
                        name: required_attribute(child, "name")?,
                        path_name: required_attribute(child, "pathName")?,
                    });
                    parser.skip(child, child_open)?;
                }
                b"LNode" => bay.lnodes.push(parser.lnode(child, child_open)?),
                _ => parser.skip(child, child_open)?,
            }
            Ok(())
        })?;

        Ok(bay)
    }

    fn conducting_equipment(
        &mut self,
        element: &BytesStart<'a>,
        open: bool,
        parent: &str,
    ) -> Result<ConductingEquipment> {
        let name = required_attribute(element, "name")?;
        let type_code = required_attribute(element, "type")?;
        let mut equipment = ConductingEquipment {
            identity: identity::named(parent, &name),
            name,
            desc: attribute(element, "desc")?,
            kind: EquipmentKind::from_code(&type_code),
            type_code,
            terminals: Vec::new(),
            lnodes: Vec::new(),
        };

        self.children(element, open, |parser, child, child_open| {
            match child.local_name().as_ref() {
                b"Terminal" => {
                    let terminal = parser.terminal(child, child_open, &equipment.identity)?;
                    equipment.terminals.push(terminal);
                }
                b"LNode" => equipment.lnodes.push(parser.lnode(child, child_open)?),
                _ => parser.skip(child, child_open)?,
            }
            Ok(())
        })?;

        Ok(equipment)
    }

    fn power_transformer(
        &mut self,
        element: &BytesStart<'a>,
        open: bool,
        parent: &str,
    ) -> Result<PowerTransformer> {
        let name = required_attribute(element, "name")?;
        let mut transformer = PowerTransformer {
            identity: identity::named(parent, &name),
            name,
            desc: attribute(element, "desc")?,
            windings: Vec::new(),
            lnodes: Vec::new(),
        };

        self.children(element, open, |parser, child, child_open| {
            match child.local_name().as_ref() {
                b"TransformerWinding" => {
                    let winding = parser.winding(child, child_open, &transformer.identity)?;
                    transformer.windings.push(winding);
                }
                b"LNode" => transformer.lnodes.push(parser.lnode(child, child_open)?),
                _ => parser.skip(child, child_open)?,
            }
            Ok(())
        })?;

        Ok(transformer)
    }

    fn winding(&mut self, element: &BytesStart<'a>, open: bool, parent: &str) -> Result<TransformerWinding> {
        let name = required_attribute(element, "name")?;
        let mut winding = TransformerWinding {
            identity: identity::named(parent, &name),
            name,
            terminals: Vec::new(),
            neutral_point: None,
        };

        self.children(element, open, |parser, child, child_open| {
            match child.local_name().as_ref() {
                b"Terminal" => {
                    let terminal = parser.terminal(child, child_open, &winding.identity)?;
                    winding.terminals.push(terminal);
                }
                b"NeutralPoint" => {
                    let neutral = parser.terminal(child, child_open, &winding.identity)?;
                    winding.neutral_point = Some(neutral);
                }
                _ => parser.skip(child, child_open)?,
            }
            Ok(())
        })?;

        Ok(winding)
    }

    fn terminal(&mut self, element: &BytesStart<'a>, open: bool, parent: &str) -> Result<Terminal> {
        let name = attribute(element, "name")?;
        let connectivity_node = attribute(element, "connectivityNode")?;
        let cnode_name = attribute(element, "cNodeName")?;
        self.skip(element, open)?;

        let anchor = connectivity_node
            .as_deref()
            .or(name.as_deref())
            .unwrap_or_default();
        Ok(Terminal {
            identity: identity::attached(parent, anchor),
            name,
            connectivity_node,
            cnode_name,
        })
    }

    fn lnode(&mut self, element: &BytesStart<'a>, open: bool) -> Result<LNode> {
        let lnode = LNode {
            ied_name: attribute(element, "iedName")?,
            ld_inst: attribute(element, "ldInst")?,
            prefix: attribute(element, "prefix")?,
            ln_class: required_attribute(element, "lnClass")?,
            ln_inst: attribute(element, "lnInst")?,
        };
        self.skip(element, open)?;
        Ok(lnode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const SMALL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SCL xmlns="http://www.iec.ch/61850/2003/SCL" xmlns:esld="https://example.org/sld">
  <Header id="small"/>
  <Substation name="S1" desc="Test &amp; station">
    <PowerTransformer name="T1" type="PTR">
      <TransformerWinding name="W1" type="PTW">
        <Terminal name="T1" connectivityNode="S1/220/B1/L2" cNodeName="L2"/>
      </TransformerWinding>
      <TransformerWinding name="W2" type="PTW">
        <Terminal name="T1" connectivityNode="S1/66/B2/L1" cNodeName="L1"/>
        <NeutralPoint name="N1" connectivityNode="S1/66/B2/N1" cNodeName="N1"/>
      </TransformerWinding>
    </PowerTransformer>
    <VoltageLevel name="220">
      <esld:Section x="1"><esld:Vertex/></esld:Section>
      <Voltage unit="V" multiplier="k">220</Voltage>
      <Bay name="B1">
        <LNode iedName="None" lnClass="XCBR" lnInst="1"/>
        <ConductingEquipment name="CB1" type="CBR">
          <Terminal name="T1" connectivityNode="S1/220/B1/L1" cNodeName="L1"/>
          <Terminal name="T2" connectivityNode="S1/220/B1/L2" cNodeName="L2"/>
          <LNode iedName="P1" ldInst="CB" lnClass="CSWI" lnInst="1"/>
        </ConductingEquipment>
        <ConductingEquipment name="ES1" type="DIS">
          <Terminal name="T1" connectivityNode="S1/220/B1/L2" cNodeName="L2"/>
          <Terminal name="T2" connectivityNode="S1/220/B1/grounded" cNodeName="grounded"/>
        </ConductingEquipment>
        <ConnectivityNode name="L1" pathName="S1/220/B1/L1"/>
        <ConnectivityNode name="L2" pathName="S1/220/B1/L2"/>
      </Bay>
    </VoltageLevel>
  </Substation>
  <IED name="P1"><AccessPoint name="AP1"/></IED>
</SCL>"#;

    #[test]
    fn test_parse_tree() {
        let doc = SclDocument::from_str(SMALL).unwrap();
        assert_eq!(doc.substations().len(), 1);

        let substation = &doc.substations()[0];
        assert_eq!(substation.name, "S1");
        assert_eq!(substation.desc.as_deref(), Some("Test & station"));
        assert_eq!(substation.transformers.len(), 1);

        let level = &substation.voltage_levels[0];
        assert_eq!(level.identity, "S1>220");
        assert_eq!(level.voltage.as_ref().and_then(Voltage::volts), Some(220_000.0));

        let bay = &level.bays[0];
        assert_eq!(bay.identity, "S1>220>B1");
        assert_eq!(bay.equipment.len(), 2);
        assert_eq!(bay.connectivity_nodes[1].path_name, "S1/220/B1/L2");

        let breaker = &bay.equipment[0];
        assert_eq!(breaker.identity, "S1>220>B1>CB1");
        assert_eq!(breaker.kind, Some(EquipmentKind::Cbr));
        assert_eq!(breaker.terminals[0].identity, "S1>220>B1>CB1>S1/220/B1/L1");
        assert!(bay.equipment[1].terminals[1].is_grounded());
    }

    #[test]
    fn test_parse_transformer() {
        let doc = SclDocument::from_str(SMALL).unwrap();
        let transformer = doc.transformers().next().unwrap();

        assert_eq!(transformer.identity, "S1>T1");
        assert_eq!(transformer.windings.len(), 2);
        assert_eq!(transformer.terminals().count(), 2);

        let neutral = transformer.windings[1].neutral_point.as_ref().unwrap();
        assert_eq!(neutral.identity, "S1>T1>W2>S1/66/B2/N1");
        assert_eq!(neutral.connectivity_node.as_deref(), Some("S1/66/B2/N1"));
    }

    #[test]
    fn test_lnodes() {
        let doc = SclDocument::from_str(SMALL).unwrap();
        let (_, bay) = doc.bay("B1").unwrap();
        let lnodes: Vec<&LNode> = bay.all_lnodes().collect();

        assert_eq!(lnodes.len(), 2);
        assert_eq!(lnodes[0].ln_class, "XCBR");
        assert!(!lnodes[0].is_ied_connected());
        assert!(lnodes[1].is_ied_connected());
    }

    #[test]
    fn test_terminals_transformers_first() {
        let doc = SclDocument::from_str(SMALL).unwrap();
        let nodes: Vec<&str> = doc
            .terminals()
            .filter_map(|t| t.connectivity_node.as_deref())
            .collect();

        assert_eq!(
            nodes,
            vec![
                "S1/220/B1/L2",
                "S1/66/B2/L1",
                "S1/220/B1/L1",
                "S1/220/B1/L2",
                "S1/220/B1/L2",
                "S1/220/B1/grounded",
            ]
        );
    }

    #[test]
    fn test_voltage_multipliers() {
        let volts = |value: f64, multiplier: &str| {
            Voltage {
                value,
                multiplier: multiplier.to_string(),
                unit: "V".to_string(),
            }
            .volts()
        };

        assert_eq!(volts(400.0, ""), Some(400.0));
        assert_eq!(volts(66.0, "k"), Some(66_000.0));
        assert_eq!(volts(1.2, "M"), Some(1_200_000.0));
        assert_eq!(volts(500.0, "m"), Some(0.5));
        assert_eq!(volts(1.0, "x"), None);
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let err = SclDocument::from_str(r#"<SCL><Substation><VoltageLevel/></Substation></SCL>"#)
            .unwrap_err();
        match err {
            Error::Malformed { message, .. } => assert!(message.contains("'name'")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unusable_voltage_leaves_level_without_voltage() {
        for voltage in [
            r#"<Voltage unit="V" multiplier="k"/>"#,
            r#"<Voltage unit="V" multiplier="k"></Voltage>"#,
            r#"<Voltage unit="V" multiplier="k">n/a</Voltage>"#,
        ] {
            let xml = format!(
                r#"<SCL><Substation name="S"><VoltageLevel name="V">{voltage}
                <Bay name="B1"><ConnectivityNode name="L1" pathName="S/V/B1/L1"/></Bay>
                </VoltageLevel></Substation></SCL>"#
            );
            let doc = SclDocument::from_str(&xml).unwrap();
            let level = &doc.substations()[0].voltage_levels[0];
            assert_eq!(level.voltage, None, "{voltage}");
            assert_eq!(level.bays.len(), 1);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            SclDocument::from_str(""),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn test_broken_xml() {
        assert!(SclDocument::from_str("<SCL><Substation name=\"S\"></SCL>").is_err());
    }

    #[test]
    fn test_nested_substation_ignored() {
        // Only direct children of the root are substation sections
        let xml = r#"<SCL><Private><Substation name="Hidden"/></Private><Substation name="S"/></SCL>"#;
        let doc = SclDocument::from_str(xml).unwrap();
        assert_eq!(doc.substations().len(), 1);
        assert_eq!(doc.substations()[0].name, "S");
    }

    #[test]
    fn test_from_str_trait() {
        let doc: SclDocument = SMALL.parse().unwrap();
        assert_eq!(doc.bays().count(), 1);
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let doc = SclDocument::from_file(file.path()).unwrap();
        assert_eq!(doc.substations()[0].name, "S1");

        let missing = SclDocument::from_file(Path::new("/nonexistent/station.scd"));
        assert!(matches!(missing, Err(Error::FileError(_))));
    }
}
