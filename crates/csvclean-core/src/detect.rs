//! Date column detection.
//!
//! Two passes: a name pass that trusts column names outright, then a
//! content pass that samples values from the remaining columns. A name
//! match short-circuits content inspection, trading recall for precision
//! on columns whose names collide with non-date content.

use csvclean_model::{CellValue, Table};

use crate::datetime::parse_datetime;

/// Name fragments that mark a column as date-like regardless of content.
pub const DATE_NAME_KEYWORDS: [&str; 6] =
    ["date", "time", "datetime", "timestamp", "created", "modified"];

/// Separators a value must contain before a parse is attempted.
const DATE_SEPARATORS: [char; 4] = ['-', '/', ':', ' '];

/// Content-pass sample cap. Columns whose dates only appear after this
/// many values can be misclassified; that is an accepted limitation, kept
/// for compatibility with existing datasets.
pub const SAMPLE_LIMIT: usize = 20;

/// Content-pass match threshold. The comparison is strict: a column at
/// exactly this ratio is not date-like. Kept literal for compatibility.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Classify the columns of a table, returning the date-like column names.
///
/// Name-pass matches come first, then content-pass matches, each in table
/// order.
pub fn detect_date_columns(table: &Table) -> Vec<String> {
    let mut date_columns: Vec<String> = Vec::new();

    for column in table.columns() {
        let name_lower = column.name.to_lowercase();
        if DATE_NAME_KEYWORDS
            .iter()
            .any(|keyword| name_lower.contains(keyword))
        {
            date_columns.push(column.name.clone());
        }
    }

    for column in table.columns() {
        if date_columns.contains(&column.name) {
            continue;
        }
        if content_looks_like_dates(&column.cells) {
            date_columns.push(column.name.clone());
        }
    }

    date_columns
}

/// Sample the first non-missing values and test what fraction parse as
/// dates.
///
/// Every sampled text or number value counts toward the denominator; the
/// digit-and-separator gate only decides whether a parse is attempted.
/// Already-parsed datetime cells are skipped entirely.
fn content_looks_like_dates(cells: &[CellValue]) -> bool {
    let mut attempted = 0usize;
    let mut parsed = 0usize;

    for cell in cells
        .iter()
        .filter(|cell| !cell.is_missing())
        .take(SAMPLE_LIMIT)
    {
        match cell {
            CellValue::Text(_) | CellValue::Number(_) => {
                attempted += 1;
                let value = cell.to_display_string();
                if has_date_shape(&value) && parse_datetime(&value).is_some() {
                    parsed += 1;
                }
            }
            CellValue::DateTime(_) | CellValue::Missing => {}
        }
    }

    attempted > 0 && (parsed as f64 / attempted as f64) > MATCH_THRESHOLD
}

fn has_date_shape(value: &str) -> bool {
    value.contains(DATE_SEPARATORS) && value.chars().any(|ch| ch.is_ascii_digit())
}
