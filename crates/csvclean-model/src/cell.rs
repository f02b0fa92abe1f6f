#![deny(unsafe_code)]

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};

/// A single cell value.
///
/// `Missing` is the canonical absent-value marker. It is distinct from an
/// empty `Text` cell and from sentinel strings like `"nan"`; the text
/// normalizer unifies all three into `Missing`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// String form of the cell, as used for content sampling and output.
    ///
    /// `Missing` renders as the empty string. Datetimes at midnight render
    /// date-only so date-typed inputs round-trip without a time suffix.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(value) => value.clone(),
            CellValue::Number(value) => format_number(*value),
            CellValue::DateTime(value) => format_datetime(*value),
            CellValue::Missing => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

/// Format a number without a trailing `.0` for integral values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Format a datetime as ISO 8601, date-only when the time is midnight.
pub fn format_datetime(value: NaiveDateTime) -> String {
    if value.time() == NaiveTime::MIN {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Per-column classification tag.
///
/// Assigned once when a table is constructed, replacing any runtime dtype
/// dispatch. `DateLike` is assigned by the date normalizer after a column
/// has been converted to `DateTime` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    /// Every non-missing cell is numeric.
    Numeric,
    /// Free-form text, or mixed content.
    Text,
    /// Converted date/time cells.
    DateLike,
    /// No non-missing cells to classify.
    Other,
}

/// Infer the kind tag for a column's cells.
pub fn infer_kind(cells: &[CellValue]) -> ColumnKind {
    let mut saw_value = false;
    let mut all_numeric = true;
    let mut all_datetime = true;
    for cell in cells {
        match cell {
            CellValue::Missing => continue,
            CellValue::Number(_) => {
                saw_value = true;
                all_datetime = false;
            }
            CellValue::DateTime(_) => {
                saw_value = true;
                all_numeric = false;
            }
            CellValue::Text(value) => {
                saw_value = true;
                all_datetime = false;
                if value.trim().parse::<f64>().is_err() {
                    all_numeric = false;
                }
            }
        }
    }
    if !saw_value {
        ColumnKind::Other
    } else if all_datetime {
        ColumnKind::DateLike
    } else if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn display_string_forms() {
        assert_eq!(CellValue::Text("abc".to_string()).to_display_string(), "abc");
        assert_eq!(CellValue::Number(5.0).to_display_string(), "5");
        assert_eq!(CellValue::Number(3.25).to_display_string(), "3.25");
        assert_eq!(CellValue::Missing.to_display_string(), "");
    }

    #[test]
    fn datetime_renders_date_only_at_midnight() {
        let midnight = NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(midnight).to_display_string(), "2023-01-05");

        let afternoon = NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(
            CellValue::DateTime(afternoon).to_display_string(),
            "2023-01-05T14:30:00"
        );
    }

    #[test]
    fn infer_kind_numeric() {
        let cells = vec![
            CellValue::Text("1".to_string()),
            CellValue::Number(2.5),
            CellValue::Missing,
        ];
        assert_eq!(infer_kind(&cells), ColumnKind::Numeric);
    }

    #[test]
    fn infer_kind_text_when_mixed() {
        let cells = vec![
            CellValue::Text("1".to_string()),
            CellValue::Text("alice".to_string()),
        ];
        assert_eq!(infer_kind(&cells), ColumnKind::Text);
    }

    #[test]
    fn infer_kind_other_when_all_missing() {
        let cells = vec![CellValue::Missing, CellValue::Missing];
        assert_eq!(infer_kind(&cells), ColumnKind::Other);
    }
}
