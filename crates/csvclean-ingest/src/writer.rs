//! Cleaned-table output.

use std::path::{Path, PathBuf};

use csvclean_model::Table;
use tracing::info;

use crate::error::{IngestError, Result};

/// Derive the output path for a cleaned copy of `source`.
///
/// The file is named `<stem>_cleaned.<ext>` and placed next to the source
/// unless an explicit output directory is given.
pub fn cleaned_output_path(source: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("data");
    let ext = source
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("csv");
    let file_name = format!("{stem}_cleaned.{ext}");
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => source.with_file_name(file_name),
    }
}

/// Write a cleaned table as delimited text.
///
/// The header row comes from the column names; there is no leading
/// row-index column. `Missing` cells render as empty fields, datetimes as
/// ISO 8601.
pub fn write_cleaned(table: &Table, source: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let path = cleaned_output_path(source, output_dir);
    let csv_error = |error: csv::Error| IngestError::Csv {
        path: path.clone(),
        source: error,
    };
    let mut writer = csv::Writer::from_path(&path).map_err(csv_error)?;

    writer
        .write_record(table.column_names())
        .map_err(csv_error)?;
    for idx in 0..table.row_count() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| column.cells[idx].to_display_string())
            .collect();
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush().map_err(|error| IngestError::Io {
        path: path.clone(),
        source: error,
    })?;

    info!(path = %path.display(), rows = table.row_count(), "wrote cleaned table");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_extension_and_directory() {
        let path = cleaned_output_path(Path::new("/data/orders.csv"), None);
        assert_eq!(path, Path::new("/data/orders_cleaned.csv"));

        let path = cleaned_output_path(Path::new("orders.tsv"), None);
        assert_eq!(path, Path::new("orders_cleaned.tsv"));
    }

    #[test]
    fn output_path_honors_output_dir() {
        let path = cleaned_output_path(Path::new("/data/orders.csv"), Some(Path::new("/out")));
        assert_eq!(path, Path::new("/out/orders_cleaned.csv"));
    }

    #[test]
    fn extensionless_source_defaults_to_csv() {
        let path = cleaned_output_path(Path::new("orders"), None);
        assert_eq!(path, Path::new("orders_cleaned.csv"));
    }
}
