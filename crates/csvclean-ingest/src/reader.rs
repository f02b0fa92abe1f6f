//! String-first CSV loading.
//!
//! Every cell enters the table as raw text so the detector sees the
//! original textual forms; only empty fields map to the missing marker.
//! Column kind tags are inferred by the table constructor.

use std::path::Path;

use csv::ReaderBuilder;
use csvclean_model::{CellValue, Table};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Strip a BOM and collapse internal whitespace runs in a header.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::new();
    for part in trimmed.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized
}

/// Map an empty field to `Missing`, keep everything else verbatim.
///
/// Interior and surrounding whitespace is preserved deliberately: the
/// detector and the text normalizer operate on the raw textual form, and
/// trimming is the normalizer's documented job, not the loader's.
fn read_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(raw.to_string())
    }
}

/// Load a delimited-text file into a [`Table`].
///
/// The first record is the header row; column order is preserved. Short
/// records are padded with `Missing`, long ones truncated to the header
/// width. All-missing rows are kept; removing them is the pipeline's job,
/// and it reports what it removed.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(read_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = headers.len(),
        "loaded table"
    );
    Ok(Table::from_rows(headers, rows)?)
}
