//! Date column normalization.

use csvclean_model::{CellValue, Column, ColumnKind, Table};
use tracing::{debug, warn};

use crate::datetime::parse_datetime;

/// Rewrite the flagged columns into parsed `DateTime` cells.
///
/// Parse failures are per-value: a cell that fails becomes `Missing`
/// without aborting the column. A column where nothing parses at all is
/// left unmodified and reported with a warning. Names absent from the
/// table are silently skipped.
pub fn normalize_date_columns(table: &mut Table, date_columns: &[String]) {
    for name in date_columns {
        let Some(column) = table.column_mut(name) else {
            continue;
        };
        convert_column(column);
    }
}

fn convert_column(column: &mut Column) {
    let mut converted = Vec::with_capacity(column.cells.len());
    let mut non_missing = 0usize;
    let mut parsed = 0usize;

    for cell in &column.cells {
        match cell {
            CellValue::Missing => converted.push(CellValue::Missing),
            CellValue::DateTime(dt) => {
                non_missing += 1;
                parsed += 1;
                converted.push(CellValue::DateTime(*dt));
            }
            CellValue::Text(_) | CellValue::Number(_) => {
                non_missing += 1;
                match parse_datetime(&cell.to_display_string()) {
                    Some(dt) => {
                        parsed += 1;
                        converted.push(CellValue::DateTime(dt));
                    }
                    None => converted.push(CellValue::Missing),
                }
            }
        }
    }

    if non_missing > 0 && parsed == 0 {
        warn!(
            column = %column.name,
            values = non_missing,
            "could not convert column to datetime; leaving it unmodified"
        );
        return;
    }

    let coerced = non_missing - parsed;
    if coerced > 0 {
        debug!(column = %column.name, coerced, "unparsable date values set to missing");
    }
    column.cells = converted;
    column.kind = ColumnKind::DateLike;
}
