//! Data model for the csvclean pipeline.
//!
//! A [`Table`] is an ordered set of named, equal-length columns. Every
//! column carries an explicit [`ColumnKind`] tag assigned at construction,
//! so downstream stages never inspect runtime types to decide behavior.

pub mod cell;
pub mod error;
pub mod metrics;
pub mod table;

pub use cell::{CellValue, ColumnKind, format_datetime, format_number, infer_kind};
pub use error::{ModelError, Result};
pub use metrics::CleanMetrics;
pub use table::{Column, Table};
