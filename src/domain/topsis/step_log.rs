//! Step Log - Labeled intermediate tables kept for auditability and export.

use serde::{Deserialize, Serialize};

/// Decimal places used when tables are shown or exported.
pub const DISPLAY_PRECISION: u32 = 4;

/// Label of the normalized matrix table.
pub const NORMALIZED_MATRIX: &str = "Normalized Matrix";
/// Label of the weighted normalized matrix table.
pub const WEIGHTED_MATRIX: &str = "Weighted Normalized Matrix";
/// Label of the ideal / negative-ideal table.
pub const IDEAL_SOLUTIONS: &str = "Ideal Solutions";
/// Label of the separation distances table.
pub const DISTANCES: &str = "Distances";
/// Label of the final scores table.
pub const TOPSIS_SCORES: &str = "TOPSIS Scores";

/// Rounds half away from zero to `precision` decimal places.
///
/// Negative zero is folded into zero so exports never show `-0`.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// One labeled row of a step table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRow {
    pub label: String,
    pub values: Vec<f64>,
}

/// A labeled intermediate table with full-precision values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepTable {
    pub label: String,
    pub columns: Vec<String>,
    pub rows: Vec<StepRow>,
}

impl StepTable {
    /// Creates an empty table with the given label and column headers.
    pub fn new(label: impl Into<String>, columns: Vec<impl Into<String>>) -> Self {
        Self {
            label: label.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn with_row(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), self.columns.len());
        self.rows.push(StepRow {
            label: label.into(),
            values,
        });
        self
    }

    /// Builds a table from row labels zipped with row values.
    pub fn from_rows<'a>(
        label: impl Into<String>,
        columns: Vec<impl Into<String>>,
        row_labels: impl IntoIterator<Item = &'a String>,
        rows: impl IntoIterator<Item = Vec<f64>>,
    ) -> Self {
        row_labels
            .into_iter()
            .zip(rows)
            .fold(Self::new(label, columns), |table, (name, values)| {
                table.with_row(name.clone(), values)
            })
    }

    /// Looks up a row by label.
    pub fn row(&self, label: &str) -> Option<&StepRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Returns a copy with every value rounded for display.
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            label: self.label.clone(),
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .map(|r| StepRow {
                    label: r.label.clone(),
                    values: r.values.iter().map(|v| round_to(*v, precision)).collect(),
                })
                .collect(),
        }
    }
}

/// Ordered sequence of intermediate tables, in computation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLog {
    tables: Vec<StepTable>,
}

impl StepLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table.
    pub fn record(&mut self, table: StepTable) {
        self.tables.push(table);
    }

    /// Returns the tables in recording order.
    pub fn tables(&self) -> &[StepTable] {
        &self.tables
    }

    /// Looks up a table by label.
    pub fn get(&self, label: &str) -> Option<&StepTable> {
        self.tables.iter().find(|t| t.label == label)
    }

    /// Returns the labels in recording order.
    pub fn labels(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.label.as_str()).collect()
    }

    /// Returns the number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns a copy with every table rounded for display.
    pub fn rounded(&self, precision: u32) -> Self {
        Self {
            tables: self.tables.iter().map(|t| t.rounded(precision)).collect(),
        }
    }
}
