use std::path::PathBuf;

use csvclean_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no CSV files to choose from")]
    NoCandidates,
    #[error("selection {choice} is out of range (1-{available})")]
    InvalidSelection { choice: usize, available: usize },
    #[error("csv error at {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid table: {0}")]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
