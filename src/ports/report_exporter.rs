//! Report Exporter Port - Rendering results and calculation steps.
//!
//! This port defines the contract for turning an engine outcome into
//! downloadable documents. Adapters (like CsvReportExporter) provide the
//! formats.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::topsis::{StepLog, TopsisOutcome};

/// Base filename of the ranked results document.
pub const RESULTS_BASENAME: &str = "topsis_results";

/// Base filename of the calculation steps document.
pub const STEPS_BASENAME: &str = "topsis_calculation_steps";

/// Port for rendering analysis output.
///
/// # Contract
///
/// Implementations must:
/// - Render results sorted by rank
/// - Render step tables in log order with their labels
/// - Round displayed values to the configured precision, never the
///   underlying outcome
pub trait ReportExporter: Send + Sync {
    /// Renders the ranked results table.
    fn results(&self, outcome: &TopsisOutcome) -> Result<String, ExportError>;

    /// Renders every intermediate table of the step log.
    fn steps(&self, log: &StepLog) -> Result<String, ExportError>;

    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Renders both documents ready for storage.
    fn export(&self, outcome: &TopsisOutcome) -> Result<Vec<ExportedDocument>, ExportError> {
        Ok(vec![
            ExportedDocument::new(self.results(outcome)?, self.format(), RESULTS_BASENAME),
            ExportedDocument::new(self.steps(&outcome.step_log)?, self.format(), STEPS_BASENAME),
        ])
    }
}

/// Port for persisting exported documents somewhere the user can pick them up.
pub trait ReportStorage: Send + Sync {
    /// Stores a document and returns where it ended up.
    fn store(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError>;
}

/// Export formats supported by the exporters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// Pretty-printed JSON.
    Json,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    /// The rendered content.
    pub content: String,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: String, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Rendering failed.
    #[error("Rendering failed: {0}")]
    RenderFailed(String),

    /// I/O error while storing.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create a rendering error.
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed(reason.into())
    }

    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
            ExportError::RenderFailed(_) | ExportError::IoError(_) => ErrorCode::ExportFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_parses_case_insensitively() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn export_format_metadata() {
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv; charset=utf-8");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
    }

    #[test]
    fn exported_document_builds_filename() {
        let doc = ExportedDocument::new("a,b\n".to_string(), ExportFormat::Csv, STEPS_BASENAME);
        assert_eq!(doc.filename, "topsis_calculation_steps.csv");
        assert_eq!(doc.content_type, "text/csv; charset=utf-8");
    }

    #[test]
    fn export_error_codes() {
        assert_eq!(ExportError::io_error("disk full").code(), ErrorCode::ExportFailed);
        assert_eq!(
            ExportError::UnsupportedFormat("pdf".into()).code(),
            ErrorCode::UnsupportedFormat
        );
    }
}
