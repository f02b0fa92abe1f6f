use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column '{name}' has {found} rows, expected {expected}")]
    RaggedColumns {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
