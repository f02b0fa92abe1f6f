//! Free-text column normalization.

use std::collections::BTreeSet;

use csvclean_model::{CellValue, ColumnKind, Table};
use tracing::debug;

/// Sentinel strings unified into the missing marker after case folding.
const SENTINEL_VALUES: [&str; 2] = ["nan", "none"];

/// Rewrite every text-kind column that is not excluded.
///
/// Cells are coerced to their string form, trimmed, lower-cased unless the
/// column was flagged date-like (a flagged column only reaches this stage
/// when its date conversion failed, and its casing is preserved for a
/// later manual pass), and sentinel values collapse into `Missing`.
/// Columns in the exclusion set, and columns of any non-text kind, pass
/// through untouched. Returns the names of the rewritten columns.
pub fn normalize_text_columns(
    table: &mut Table,
    date_columns: &[String],
    exclude: &BTreeSet<String>,
) -> Vec<String> {
    let mut rewritten = Vec::new();
    for column in table.columns_mut() {
        if column.kind != ColumnKind::Text {
            continue;
        }
        if exclude.contains(&column.name) {
            debug!(column = %column.name, "excluded from text normalization");
            continue;
        }
        let fold_case = !date_columns.contains(&column.name);
        for cell in &mut column.cells {
            *cell = normalize_cell(cell, fold_case);
        }
        rewritten.push(column.name.clone());
    }
    rewritten
}

/// Trim, optionally case-fold, and unify sentinels into `Missing`.
///
/// Folding happens before the sentinel comparison so that `"None"`,
/// `"NaN"`, etc. are caught. A value that is empty after trimming is also
/// missing.
fn normalize_cell(cell: &CellValue, fold_case: bool) -> CellValue {
    if cell.is_missing() {
        return CellValue::Missing;
    }
    let trimmed = cell.to_display_string().trim().to_string();
    let value = if fold_case {
        trimmed.to_lowercase()
    } else {
        trimmed
    };
    if value.is_empty() || SENTINEL_VALUES.contains(&value.as_str()) {
        CellValue::Missing
    } else {
        CellValue::Text(value)
    }
}
