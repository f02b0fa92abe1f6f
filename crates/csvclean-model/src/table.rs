#![deny(unsafe_code)]

use crate::cell::{CellValue, ColumnKind, infer_kind};
use crate::error::{ModelError, Result};

/// A named, kind-tagged column of cells.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub cells: Vec<CellValue>,
}

impl Column {
    /// Build a column, inferring its kind tag from the cells.
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        let kind = infer_kind(&cells);
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    pub fn with_kind(name: impl Into<String>, kind: ColumnKind, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }
}

/// An in-memory table: ordered columns of equal length.
///
/// Rows are positionally aligned across columns; the row index is the
/// position in each column's cell vector.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from columns, rejecting ragged input.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            for column in &columns {
                if column.cells.len() != expected {
                    return Err(ModelError::RaggedColumns {
                        name: column.name.clone(),
                        expected,
                        found: column.cells.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Build a table from a header row and positional data rows.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let width = headers.len();
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ModelError::RaggedRow {
                    row: idx,
                    expected: width,
                    found: row.len(),
                });
            }
        }
        let mut cells_by_column: Vec<Vec<CellValue>> =
            headers.iter().map(|_| Vec::with_capacity(rows.len())).collect();
        for row in rows {
            for (col_idx, cell) in row.into_iter().enumerate() {
                cells_by_column[col_idx].push(cell);
            }
        }
        let columns = headers
            .into_iter()
            .zip(cells_by_column)
            .map(|(name, cells)| Column::new(name, cells))
            .collect();
        Ok(Self { columns })
    }

    /// Re-check the equal-length invariant.
    ///
    /// Columns are reachable mutably through [`Table::columns_mut`], so a
    /// caller can leave the table ragged; consumers that require alignment
    /// call this before processing.
    pub fn validate(&self) -> Result<()> {
        if let Some(first) = self.columns.first() {
            let expected = first.cells.len();
            for column in &self.columns {
                if column.cells.len() != expected {
                    return Err(ModelError::RaggedColumns {
                        name: column.name.clone(),
                        expected,
                        found: column.cells.len(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.cells.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }

    /// Cells of one row, in column order.
    pub fn row(&self, idx: usize) -> Option<Vec<&CellValue>> {
        if idx >= self.row_count() {
            return None;
        }
        Some(self.columns.iter().map(|column| &column.cells[idx]).collect())
    }

    /// Keep only the rows whose mask entry is true.
    ///
    /// The surviving rows are renumbered contiguously by their new position.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.row_count());
        for column in &mut self.columns {
            let mut mask = keep.iter();
            column.cells.retain(|_| *mask.next().unwrap_or(&false));
        }
    }
}
