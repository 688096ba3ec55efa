use std::path::Path;

use gridwalk::scl::queries;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_document,
    output::{print_output, Column, TabWriter},
};

#[derive(Debug, Serialize)]
struct BayEntry {
    name: String,
    desc: Option<String>,
    equipment: usize,
    ieds: Vec<String>,
}

#[derive(Debug, Serialize)]
struct BaysOutput {
    bus: String,
    bays: Vec<BayEntry>,
}

pub fn run(path: &Path, bus: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let doc = load_document(path)?;

    if !queries::buses(&doc).iter().any(|b| b.name() == bus) {
        anyhow::bail!("no bus named '{bus}' in {}", path.display());
    }

    let bays = queries::connected_bays(&doc, bus)
        .into_iter()
        .map(|bay| BayEntry {
            name: bay.name.clone(),
            desc: bay.desc.clone(),
            equipment: bay.equipment.len(),
            ieds: queries::connected_ieds(&doc, &[bay.name.as_str()]),
        })
        .collect();

    let output = BaysOutput {
        bus: bus.to_string(),
        bays,
    };

    print_output(&output, opts, |out| {
        println!("Bays connected to {} ({} entries):", out.bus, out.bays.len());
        if out.bays.is_empty() {
            return;
        }

        let mut tw = TabWriter::new(&[
            Column::text("Bay"),
            Column::count("Equipment"),
            Column::text("IEDs"),
            Column::text("Description"),
        ])
        .indent(2);
        for bay in &out.bays {
            tw.row(vec![
                bay.name.clone(),
                bay.equipment.to_string(),
                bay.ieds.join(", "),
                bay.desc.clone().unwrap_or_default(),
            ]);
        }
        tw.print();
    })
}
