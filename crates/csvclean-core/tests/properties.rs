//! Property tests for the pipeline's structural guarantees.

use std::collections::BTreeSet;

use proptest::prelude::*;

use csvclean_core::{clean_table, normalize_text_columns, reduce_rows};
use csvclean_model::{CellValue, Table};

fn arb_cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        2 => Just(CellValue::Missing),
        4 => "[ A-Za-z0-9./:-]{0,12}".prop_map(CellValue::Text),
        1 => Just(CellValue::Text("NaN".to_string())),
        1 => Just(CellValue::Text("None".to_string())),
        2 => (-10_000i32..10_000).prop_map(|n| CellValue::Number(f64::from(n) / 4.0)),
    ]
}

fn arb_table() -> impl Strategy<Value = Table> {
    (1usize..5, 0usize..25).prop_flat_map(|(width, height)| {
        let headers: Vec<String> = (0..width).map(|idx| format!("col{idx}")).collect();
        proptest::collection::vec(proptest::collection::vec(arb_cell(), width), height)
            .prop_map(move |rows| Table::from_rows(headers.clone(), rows).unwrap())
    })
}

proptest! {
    #[test]
    fn text_normalizer_is_idempotent(table in arb_table()) {
        let exclude = BTreeSet::new();
        let mut once = table.clone();
        normalize_text_columns(&mut once, &[], &exclude);
        let mut twice = once.clone();
        normalize_text_columns(&mut twice, &[], &exclude);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn row_reducer_is_idempotent(table in arb_table()) {
        let mut reduced = table.clone();
        reduce_rows(&mut reduced);
        let mut again = reduced.clone();
        let second = reduce_rows(&mut again);
        prop_assert_eq!(second.removed_empty, 0);
        prop_assert_eq!(second.removed_duplicate, 0);
        prop_assert_eq!(reduced, again);
    }

    #[test]
    fn metrics_always_account_for_every_row(table in arb_table()) {
        let outcome = clean_table(&table, &BTreeSet::new()).unwrap();
        let metrics = &outcome.metrics;
        prop_assert_eq!(
            metrics.rows_removed_total(),
            metrics.rows_removed_empty + metrics.rows_removed_duplicate
        );
        prop_assert_eq!(
            metrics.final_rows + metrics.rows_removed_total(),
            metrics.initial_rows
        );
        prop_assert_eq!(outcome.table.row_count(), metrics.final_rows);
        prop_assert_eq!(metrics.final_columns, metrics.initial_columns);
    }
}
