//! Column-type inference and normalization pipeline.
//!
//! The core of csvclean: given an in-memory [`Table`](csvclean_model::Table),
//! decide which columns hold date/time data, rewrite them into parsed
//! values, normalize the remaining free-text columns, and drop empty and
//! duplicate rows. Everything here is pure with respect to I/O; loading,
//! saving, and prompting live in the adapter crates.

pub mod datetime;
pub mod detect;
pub mod error;
pub mod normalize_dates;
pub mod normalize_text;
pub mod pipeline;
pub mod reduce;

pub use datetime::parse_datetime;
pub use detect::{DATE_NAME_KEYWORDS, MATCH_THRESHOLD, SAMPLE_LIMIT, detect_date_columns};
pub use error::{CleanError, Result};
pub use normalize_dates::normalize_date_columns;
pub use normalize_text::normalize_text_columns;
pub use pipeline::{CleanOutcome, clean_table};
pub use reduce::{ReduceOutcome, reduce_rows};
