//! JSON Report Exporter - Implementation of ReportExporter.

use serde::Serialize;

use crate::domain::topsis::{round_to, StepLog, TopsisOutcome};
use crate::ports::{ExportError, ExportFormat, ReportExporter};

/// Renders results and step tables as pretty-printed JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonReportExporter {
    precision: u32,
}

#[derive(Serialize)]
struct ResultRow<'a> {
    alternative: &'a str,
    values: Vec<CriterionValue<'a>>,
    score: f64,
    rank: u32,
}

#[derive(Serialize)]
struct CriterionValue<'a> {
    criterion: &'a str,
    value: f64,
}

impl JsonReportExporter {
    /// Creates an exporter that rounds values to `precision` decimals.
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }
}

impl ReportExporter for JsonReportExporter {
    fn results(&self, outcome: &TopsisOutcome) -> Result<String, ExportError> {
        let rows: Vec<ResultRow<'_>> = outcome
            .ranked()
            .into_iter()
            .map(|s| ResultRow {
                alternative: &s.alternative,
                values: outcome
                    .criteria
                    .iter()
                    .zip(&s.values)
                    .map(|(criterion, value)| CriterionValue {
                        criterion,
                        value: *value,
                    })
                    .collect(),
                score: round_to(s.score, self.precision),
                rank: s.rank,
            })
            .collect();
        serde_json::to_string_pretty(&rows).map_err(|e| ExportError::render_failed(e.to_string()))
    }

    fn steps(&self, log: &StepLog) -> Result<String, ExportError> {
        serde_json::to_string_pretty(&log.rounded(self.precision))
            .map_err(|e| ExportError::render_failed(e.to_string()))
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }
}
