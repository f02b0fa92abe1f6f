//! The cleaning pipeline orchestrator.

use std::collections::BTreeSet;

use csvclean_model::{CleanMetrics, ColumnKind, Table};
use tracing::{error, info};

use crate::detect::detect_date_columns;
use crate::error::{CleanError, Result};
use crate::normalize_dates::normalize_date_columns;
use crate::normalize_text::normalize_text_columns;
use crate::reduce::reduce_rows;

/// A cleaned table together with the run's metrics.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub table: Table,
    pub metrics: CleanMetrics,
}

/// Run the full cleaning pipeline over one table.
///
/// Stages run in fixed order: date detection, date normalization, text
/// normalization, row reduction. The caller's table is never mutated; the
/// pipeline works on a copy and returns it. `exclude` exempts columns from
/// text normalization only, not from date detection.
pub fn clean_table(table: &Table, exclude: &BTreeSet<String>) -> Result<CleanOutcome> {
    let mut working = table.clone();
    if let Err(source) = working.validate() {
        error!(%source, "refusing to clean a malformed table");
        return Err(CleanError::MalformedTable(source));
    }

    let initial_rows = working.row_count();
    let initial_columns = working.column_count();
    info!(rows = initial_rows, columns = initial_columns, "starting clean");

    let date_columns = detect_date_columns(&working);
    info!(columns = ?date_columns, "detected date/time columns");
    normalize_date_columns(&mut working, &date_columns);

    let text_columns: Vec<String> = working
        .columns()
        .iter()
        .filter(|column| column.kind == ColumnKind::Text)
        .map(|column| column.name.clone())
        .collect();
    info!(columns = ?text_columns, "text columns to clean");
    normalize_text_columns(&mut working, &date_columns, exclude);

    let reduced = reduce_rows(&mut working);
    if reduced.removed_empty > 0 {
        info!(rows = reduced.removed_empty, "removed all-missing rows");
    }
    if reduced.removed_duplicate > 0 {
        info!(rows = reduced.removed_duplicate, "removed duplicate rows");
    }

    let metrics = CleanMetrics {
        initial_rows,
        initial_columns,
        date_columns,
        text_columns,
        rows_removed_empty: reduced.removed_empty,
        rows_removed_duplicate: reduced.removed_duplicate,
        final_rows: working.row_count(),
        final_columns: working.column_count(),
    };
    info!(
        rows = metrics.final_rows,
        columns = metrics.final_columns,
        removed = metrics.rows_removed_total(),
        "clean finished"
    );

    Ok(CleanOutcome {
        table: working,
        metrics,
    })
}
