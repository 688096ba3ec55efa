use std::path::Path;

use gridwalk::scl::queries;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{format_voltage, load_document},
    output::{or_missing, print_output, Column, TabWriter},
};

#[derive(Debug, Serialize)]
struct BusEntry {
    name: String,
    voltage_level: String,
    voltage: String,
    connectivity_node: Option<String>,
    connected_bays: usize,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let doc = load_document(path)?;

    let entries: Vec<BusEntry> = queries::buses(&doc)
        .iter()
        .map(|bus| BusEntry {
            name: bus.name().to_string(),
            voltage_level: bus.level.name.clone(),
            voltage: format_voltage(bus.level),
            connectivity_node: bus.connectivity_node().map(|node| node.path_name.clone()),
            connected_bays: queries::connected_bays(&doc, bus.name()).len(),
        })
        .collect();

    print_output(&entries, opts, |entries| {
        if entries.is_empty() {
            println!("No buses found.");
            return;
        }

        let mut tw = TabWriter::new(&[
            Column::text("Bus"),
            Column::text("Level"),
            Column::count("Voltage"),
            Column::text("Node"),
            Column::count("Bays"),
        ]);
        for entry in entries {
            tw.row(vec![
                entry.name.clone(),
                entry.voltage_level.clone(),
                entry.voltage.clone(),
                or_missing(entry.connectivity_node.as_deref()),
                entry.connected_bays.to_string(),
            ]);
        }
        tw.print();
    })
}
