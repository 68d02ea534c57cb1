//! CSV Report Exporter - Implementation of ReportExporter.
//!
//! The steps document is compatible with the earlier spreadsheet workflow:
//! each table is a section whose header row starts with the table label,
//! followed by one row per labeled row, and a blank line after it.

use std::fmt::Write;

use crate::domain::topsis::{round_to, StepLog, StepTable, TopsisOutcome};
use crate::ports::{ExportError, ExportFormat, ReportExporter};

/// Renders results and step tables as comma-separated values.
#[derive(Debug, Clone, Copy)]
pub struct CsvReportExporter {
    precision: u32,
}

impl CsvReportExporter {
    /// Creates an exporter that rounds values to `precision` decimals.
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    fn number(&self, value: f64) -> String {
        round_to(value, self.precision).to_string()
    }

    fn write_table(&self, out: &mut String, table: &StepTable) -> std::fmt::Result {
        let header: Vec<String> = std::iter::once(&table.label)
            .chain(&table.columns)
            .map(|h| escape(h))
            .collect();
        writeln!(out, "{}", header.join(","))?;

        for row in &table.rows {
            let cells: Vec<String> = std::iter::once(escape(&row.label))
                .chain(row.values.iter().map(|v| self.number(*v)))
                .collect();
            writeln!(out, "{}", cells.join(","))?;
        }
        writeln!(out)
    }
}

impl ReportExporter for CsvReportExporter {
    fn results(&self, outcome: &TopsisOutcome) -> Result<String, ExportError> {
        let header: Vec<String> = std::iter::once("Alternative")
            .chain(outcome.criteria.iter().map(String::as_str))
            .chain(["TOPSIS Score", "Rank"])
            .map(escape)
            .collect();
        let mut out = header.join(",");
        out.push('\n');

        // Raw values are inputs and are written as given.
        for score in outcome.ranked() {
            let cells: Vec<String> = std::iter::once(escape(&score.alternative))
                .chain(score.values.iter().map(f64::to_string))
                .chain([self.number(score.score), score.rank.to_string()])
                .collect();
            writeln!(out, "{}", cells.join(","))
                .map_err(|e| ExportError::render_failed(e.to_string()))?;
        }
        Ok(out)
    }

    fn steps(&self, log: &StepLog) -> Result<String, ExportError> {
        let mut out = String::new();
        for table in log.tables() {
            self.write_table(&mut out, table)
                .map_err(|e| ExportError::render_failed(e.to_string()))?;
        }
        Ok(out)
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }
}

/// Quotes a field when it contains a delimiter, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
