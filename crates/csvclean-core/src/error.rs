use csvclean_model::ModelError;
use thiserror::Error;

/// Pipeline-stage failure.
///
/// Value- and column-level problems are recovered inside the stages; only
/// conditions that invalidate the whole invocation surface here, and no
/// cleaned table is returned alongside them.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("malformed table: {0}")]
    MalformedTable(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, CleanError>;
