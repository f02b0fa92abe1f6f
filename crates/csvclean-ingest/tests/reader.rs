//! Loader behavior against real files.

use csvclean_ingest::read_table;
use csvclean_model::{CellValue, ColumnKind};
use tempfile::TempDir;

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn preserves_column_order_and_raw_values() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "orders.csv",
        "OrderDate,Name,Qty\n2023-01-05, Alice ,5\n,,\n",
    );
    let table = read_table(&path).unwrap();

    assert_eq!(
        table.column_names(),
        vec!["OrderDate".to_string(), "Name".to_string(), "Qty".to_string()]
    );
    assert_eq!(table.row_count(), 2);
    // Raw textual forms survive ingestion.
    assert_eq!(table.column("Name").unwrap().cells[0], text(" Alice "));
    // Empty fields are missing from the start.
    assert_eq!(table.row(1).unwrap(), vec![
        &CellValue::Missing,
        &CellValue::Missing,
        &CellValue::Missing
    ]);
}

#[test]
fn column_kinds_assigned_at_ingestion() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "kinds.csv",
        "qty,name,empty\n5,Alice,\n7.5,Bob,\n",
    );
    let table = read_table(&path).unwrap();

    assert_eq!(table.column("qty").unwrap().kind, ColumnKind::Numeric);
    assert_eq!(table.column("name").unwrap().kind, ColumnKind::Text);
    assert_eq!(table.column("empty").unwrap().kind, ColumnKind::Other);
}

#[test]
fn short_rows_are_padded_to_header_width() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "ragged.csv", "a,b,c\n1,2\n1,2,3,4\n");
    let table = read_table(&path).unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.row(0).unwrap(), vec![
        &text("1"),
        &text("2"),
        &CellValue::Missing
    ]);
    // Extra fields beyond the header are dropped.
    assert_eq!(table.row(1).unwrap(), vec![&text("1"), &text("2"), &text("3")]);
}

#[test]
fn bom_is_stripped_from_the_first_header() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "bom.csv", "\u{feff}id,name\n1,Alice\n");
    let table = read_table(&path).unwrap();
    assert!(table.column("id").is_some());
}

#[test]
fn missing_file_is_a_csv_error() {
    let dir = TempDir::new().unwrap();
    let result = read_table(&dir.path().join("nope.csv"));
    assert!(result.is_err());
}
