use std::path::Path;

use gridwalk::scl::{queries, TopologyConfig};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_document,
    output::{print_output, Column, TabWriter},
};

#[derive(Debug, Serialize)]
struct PrimaryEntry {
    category: &'static str,
    name: String,
    identity: String,
    configurable: bool,
}

#[derive(Debug, Serialize)]
struct PrimaryOutput {
    min_voltage: f64,
    items: Vec<PrimaryEntry>,
}

pub fn run(path: &Path, min_voltage: Option<f64>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let doc = load_document(path)?;

    let mut config = TopologyConfig::default();
    if let Some(volts) = min_voltage {
        config = config.with_min_primary_voltage(volts);
    }

    let items = queries::primary_equipment(&doc, &config)
        .into_iter()
        .map(|item| PrimaryEntry {
            category: item.category.title(),
            name: item.name.to_string(),
            identity: item.identity.to_string(),
            configurable: item.configurable,
        })
        .collect();

    let output = PrimaryOutput {
        min_voltage: config.min_primary_voltage,
        items,
    };

    print_output(&output, opts, |out| {
        if out.items.is_empty() {
            println!("No primary equipment at or above {} V.", out.min_voltage);
            return;
        }

        let mut category = "";
        let mut tw: Option<TabWriter> = None;
        for item in &out.items {
            if item.category != category {
                if let Some(table) = tw.take() {
                    table.print();
                    println!();
                }
                category = item.category;
                println!("{category}:");
                tw = Some(
                    TabWriter::new(&[
                        Column::text("Name"),
                        Column::text("Identity"),
                        Column::text("Status"),
                    ])
                    .indent(2),
                );
            }
            if let Some(table) = tw.as_mut() {
                table.row(vec![
                    item.name.clone(),
                    item.identity.clone(),
                    if item.configurable {
                        String::new()
                    } else {
                        "not supported".to_string()
                    },
                ]);
            }
        }
        if let Some(table) = tw {
            table.print();
        }
    })
}
