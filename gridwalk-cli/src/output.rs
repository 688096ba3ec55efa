use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Placeholder shown for absent values in tables.
pub const MISSING: &str = "-";

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        display_fn(data);
    }
    Ok(())
}

/// The cell text for an optional value.
pub fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}

/// A table column: header text plus alignment.
///
/// Names and identities read left to right; counts line up on the right.
#[derive(Clone, Copy)]
pub struct Column<'h> {
    header: &'h str,
    alignment: CellAlignment,
}

impl<'h> Column<'h> {
    pub fn text(header: &'h str) -> Self {
        Self {
            header,
            alignment: CellAlignment::Left,
        }
    }

    pub fn count(header: &'h str) -> Self {
        Self {
            header,
            alignment: CellAlignment::Right,
        }
    }
}

/// Borderless table printed as whitespace-aligned columns.
pub struct TabWriter {
    table: Table,
    indent: usize,
}

impl TabWriter {
    pub fn new(columns: &[Column<'_>]) -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(columns.iter().map(|column| Cell::new(column.header)));

        // Two spaces between columns, none at the outer edges
        let last = columns.len().saturating_sub(1);
        for (i, column) in columns.iter().enumerate() {
            if let Some(col) = table.column_mut(i) {
                col.set_cell_alignment(column.alignment);
                col.set_padding((u16::from(i != 0), u16::from(i != last)));
            }
        }

        Self { table, indent: 0 }
    }

    /// Nests the table below a heading by `depth` spaces.
    pub fn indent(mut self, depth: usize) -> Self {
        self.indent = depth;
        self
    }

    pub fn row<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.table
            .add_row(values.into_iter().map(|value| Cell::new(value.into())));
    }

    /// The table text, one line per row, trailing whitespace removed.
    pub fn render(&self) -> String {
        let prefix = " ".repeat(self.indent);
        self.table
            .to_string()
            .lines()
            .map(|line| format!("{prefix}{}", line.trim_end()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}
