//! Load → clean → save round trip.

use std::collections::BTreeSet;

use csvclean_core::clean_table;
use csvclean_ingest::{read_table, write_cleaned};
use tempfile::TempDir;

#[test]
fn cleaned_file_is_written_next_to_the_source() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("orders.csv");
    std::fs::write(
        &source,
        "OrderDate,Name,Qty\n2023-01-05, Alice ,5\n2023-01-05,alice,5\n,,\n",
    )
    .unwrap();

    let table = read_table(&source).unwrap();
    let outcome = clean_table(&table, &BTreeSet::new()).unwrap();
    let output = write_cleaned(&outcome.table, &source, None).unwrap();

    assert_eq!(output, dir.path().join("orders_cleaned.csv"));
    let contents = std::fs::read_to_string(&output).unwrap();
    // Header row, no index column, one surviving data row with the date in
    // canonical form.
    assert_eq!(contents, "OrderDate,Name,Qty\n2023-01-05,alice,5\n");
}

#[test]
fn missing_cells_render_as_empty_fields() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("people.csv");
    std::fs::write(
        &source,
        "name,comment\nAlice,fine\nBob,None\n",
    )
    .unwrap();

    let table = read_table(&source).unwrap();
    let outcome = clean_table(&table, &BTreeSet::new()).unwrap();
    let output = write_cleaned(&outcome.table, &source, None).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "name,comment\nalice,fine\nbob,\n");
}

#[test]
fn output_dir_override_is_honored() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let source = dir.path().join("orders.csv");
    std::fs::write(&source, "a,b\n1,x\n").unwrap();

    let table = read_table(&source).unwrap();
    let outcome = clean_table(&table, &BTreeSet::new()).unwrap();
    let output = write_cleaned(&outcome.table, &source, Some(out.path())).unwrap();

    assert_eq!(output, out.path().join("orders_cleaned.csv"));
    assert!(output.is_file());
}
