use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use formprops_cli::inspect::{FieldReport, HiddenReport, InspectReport};

use crate::commands::RenderOutcome;

pub fn print_render(outcome: &RenderOutcome) {
    match &outcome.written_to {
        Some(path) => eprintln!(
            "Rendered {} field(s) with the {} skin to {}",
            outcome.fields,
            outcome.skin,
            path.display()
        ),
        None => print!("{}", outcome.html),
    }
}

pub fn print_inspect(report: &InspectReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Name"),
        header_cell("Hidden inputs"),
        header_cell("Error key"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for extra in &report.extras {
        table.add_row(vec![
            dim_cell("-"),
            dim_cell("extra"),
            Cell::new(&extra.name),
            Cell::new(hidden_summary(std::slice::from_ref(extra))),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    for field in &report.fields {
        table.add_row(field_row(field));
    }
    println!("{table}");
    println!(
        "{} field(s), {} hidden input(s), {} bound error(s)",
        report.fields.len(),
        report.hidden_count(),
        report.error_count()
    );
    if !report.unused_error_keys.is_empty() {
        eprintln!("Unbound error keys:");
        for key in &report.unused_error_keys {
            eprintln!("- {key}");
        }
    }
}

fn field_row(field: &FieldReport) -> Vec<Cell> {
    vec![
        Cell::new(field.index),
        Cell::new(field.kind.as_str()),
        field
            .name
            .as_deref()
            .map_or_else(|| dim_cell("-"), Cell::new),
        if field.hidden.is_empty() {
            dim_cell("none")
        } else {
            Cell::new(hidden_summary(&field.hidden)).fg(Color::Green)
        },
        field
            .error_key
            .as_deref()
            .map_or_else(|| dim_cell("-"), Cell::new),
        match &field.error {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => dim_cell("-"),
        },
    ]
}

/// One line per hidden input: `name=value (placement)`.
pub fn hidden_summary(hidden: &[HiddenReport]) -> String {
    hidden
        .iter()
        .map(|input| {
            let value = input.value.as_deref().map_or("<no value>", |v| {
                if v.is_empty() { "\"\"" } else { v }
            });
            format!("{}={} ({})", input.name, value, input.placement)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
