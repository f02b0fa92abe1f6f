/// Shape deltas and classification results for one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CleanMetrics {
    pub initial_rows: usize,
    pub initial_columns: usize,
    /// Columns classified date-like, in table order.
    pub date_columns: Vec<String>,
    /// Columns classified as free text when the text normalizer ran, in
    /// table order. Includes excluded columns, which are detected but left
    /// untouched.
    pub text_columns: Vec<String>,
    pub rows_removed_empty: usize,
    pub rows_removed_duplicate: usize,
    pub final_rows: usize,
    pub final_columns: usize,
}

impl CleanMetrics {
    pub fn rows_removed_total(&self) -> usize {
        self.rows_removed_empty + self.rows_removed_duplicate
    }
}
