use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use prc_model::MetricValue;
use prc_transform::CleaningOutcome;

pub fn print_summary(outcome: &CleaningOutcome) {
    println!(
        "Rows: {} in, {} out",
        outcome.rows_before, outcome.rows_after
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Metric"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &outcome.report.entries {
        for (idx, (name, value)) in entry.metrics.iter().enumerate() {
            let stage_cell = if idx == 0 {
                Cell::new(&entry.stage)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                dim_cell("")
            };
            table.add_row(vec![stage_cell, Cell::new(name), metric_cell(name, value)]);
        }
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn metric_cell(name: &str, value: &MetricValue) -> Cell {
    // data-loss and duplication signals stand out when nonzero
    let highlight = name.ends_with(".coerced_to_missing") || name.ends_with("_duplicates");
    match value {
        MetricValue::Count(count) if highlight && *count > 0 => {
            Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
        }
        MetricValue::Count(count) if *count == 0 => dim_cell(count),
        other => Cell::new(other),
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
