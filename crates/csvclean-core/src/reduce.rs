//! Row reduction: empty-row removal, exact dedupe, reindexing.

use std::collections::BTreeSet;

use csvclean_model::{CellValue, Table};
use tracing::debug;

/// Row counts removed by each reduction step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceOutcome {
    pub removed_empty: usize,
    pub removed_duplicate: usize,
}

/// Drop all-missing rows, then exact duplicates of earlier survivors.
///
/// The order is fixed: empty rows go first, otherwise every all-missing
/// row after the first would be counted as a duplicate and the reported
/// split would mislead. Survivors are renumbered contiguously by their
/// storage position.
pub fn reduce_rows(table: &mut Table) -> ReduceOutcome {
    let mut outcome = ReduceOutcome::default();

    let keep: Vec<bool> = (0..table.row_count())
        .map(|idx| !row_is_empty(table, idx))
        .collect();
    outcome.removed_empty = keep.iter().filter(|kept| !**kept).count();
    table.retain_rows(&keep);

    let mut seen = BTreeSet::new();
    let keep: Vec<bool> = (0..table.row_count())
        .map(|idx| seen.insert(row_key(table, idx)))
        .collect();
    outcome.removed_duplicate = keep.iter().filter(|kept| !**kept).count();
    table.retain_rows(&keep);

    if outcome.removed_empty > 0 || outcome.removed_duplicate > 0 {
        debug!(
            empty = outcome.removed_empty,
            duplicate = outcome.removed_duplicate,
            "rows removed"
        );
    }
    outcome
}

fn row_is_empty(table: &Table, idx: usize) -> bool {
    table
        .columns()
        .iter()
        .all(|column| column.cells[idx].is_missing())
}

/// Composite dedupe key over one row.
///
/// Cell encodings are kind-tagged so values of different kinds with the
/// same string form never collide, and joined with a unit separator.
fn row_key(table: &Table, idx: usize) -> String {
    let mut key = String::new();
    for column in table.columns() {
        if !key.is_empty() {
            key.push('\u{1f}');
        }
        match &column.cells[idx] {
            CellValue::Text(value) => {
                key.push_str("t:");
                key.push_str(value);
            }
            CellValue::Number(value) => {
                key.push_str("n:");
                key.push_str(&format!("{:x}", value.to_bits()));
            }
            CellValue::DateTime(value) => {
                key.push_str("d:");
                key.push_str(&value.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
            }
            CellValue::Missing => key.push_str("m:"),
        }
    }
    key
}
