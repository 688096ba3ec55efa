use std::path::Path;

use gridwalk::{
    analysis::{ProtectionZone, ZoneStart},
    scl::{EquipmentRecord, TopologyConfig, ZoneConfig},
};
use serde::Serialize;

use crate::{
    app::{GlobalOptions, ZoneStartArgs},
    commands::common::{build_topology, load_document},
    output::{or_missing, print_output, Column, TabWriter},
};

#[derive(Debug, Serialize)]
struct ZoneEquipment {
    name: String,
    identity: String,
    r#type: String,
    bay: Option<String>,
    boundary: bool,
}

#[derive(Debug, Serialize)]
struct ZoneOutput {
    start: String,
    boundary_type: String,
    nodes: Vec<String>,
    equipment: Vec<ZoneEquipment>,
}

fn zone_start(args: &ZoneStartArgs) -> anyhow::Result<ZoneStart> {
    let start = match (&args.node, &args.transformer, &args.bus, &args.equipment) {
        (Some(node), ..) => ZoneStart::ConnectivityNode(node.clone()),
        (_, Some(name), ..) => ZoneStart::Transformer(name.clone()),
        (_, _, Some(name), _) => ZoneStart::Bus(name.clone()),
        (.., Some(name)) => ZoneStart::Equipment(name.clone()),
        _ => anyhow::bail!("one of --node, --transformer, --bus or --equipment is required"),
    };
    Ok(start)
}

fn zone_equipment(record: &EquipmentRecord, boundary_type: &str) -> ZoneEquipment {
    ZoneEquipment {
        name: record.name.clone(),
        identity: record.identity.clone(),
        r#type: record.type_code.clone(),
        bay: record.bay.clone(),
        boundary: record.is_type(boundary_type),
    }
}

pub fn run(
    path: &Path,
    start: &ZoneStartArgs,
    boundary: &str,
    minimal: bool,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let doc = load_document(path)?;
    let config = if minimal {
        TopologyConfig::minimal()
    } else {
        TopologyConfig::default()
    };
    let topology = build_topology(&doc, config)?;

    let zone_config = ZoneConfig::bounded_by_code(boundary);
    let zone = ProtectionZone::from_start(&doc, &topology, &zone_start(start)?, &zone_config)?;

    let output = ZoneOutput {
        start: zone.start().to_string(),
        boundary_type: zone_config.boundary_type.clone(),
        nodes: zone.nodes().to_vec(),
        equipment: zone
            .equipment()
            .iter()
            .map(|record| zone_equipment(record, &zone_config.boundary_type))
            .collect(),
    };

    print_output(&output, opts, |out| {
        println!("Zone around {} (bounded by {}):", out.start, out.boundary_type);
        println!("  Nodes: {}", out.nodes.len());

        if out.equipment.is_empty() {
            println!("  No equipment in zone.");
            return;
        }

        println!();
        let mut tw = TabWriter::new(&[
            Column::text("Name"),
            Column::text("Type"),
            Column::text("Bay"),
            Column::text("Boundary"),
        ])
        .indent(2);
        for item in &out.equipment {
            tw.row(vec![
                item.name.clone(),
                item.r#type.clone(),
                or_missing(item.bay.as_deref()),
                if item.boundary { "yes" } else { "" }.to_string(),
            ]);
        }
        tw.print();

        let breakers = out.equipment.iter().filter(|item| item.boundary).count();
        println!("\n{} item(s), {breakers} boundary", out.equipment.len());
    })
}
