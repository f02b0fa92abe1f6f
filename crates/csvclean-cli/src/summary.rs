//! Human- and machine-readable run summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use csvclean_model::CleanMetrics;

use crate::commands::CleanRunResult;

pub fn print_summary(result: &CleanRunResult) {
    println!("Source: {}", result.source.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let metrics = &result.metrics;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    for idx in [1, 2] {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(metrics.initial_rows),
        Cell::new(metrics.initial_columns),
    ]);
    table.add_row(vec![
        Cell::new("Empty rows removed"),
        Cell::new(metrics.rows_removed_empty),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate rows removed"),
        Cell::new(metrics.rows_removed_duplicate),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Cleaned"),
        Cell::new(metrics.final_rows),
        Cell::new(metrics.final_columns),
    ]);
    println!("{table}");

    println!("Date columns: {}", name_list(&metrics.date_columns));
    println!("Text columns: {}", name_list(&metrics.text_columns));
}

pub fn print_json(metrics: &CleanMetrics) {
    match serde_json::to_string_pretty(metrics) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("error: failed to serialize metrics: {error}"),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn name_list(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
