//! ExportReportHandler - Renders a finished analysis and stores the documents.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use super::{AnalysisError, AnalysisReport};
use crate::ports::{ReportExporter, ReportStorage};

/// Handler for exporting analysis reports.
pub struct ExportReportHandler {
    exporter: Arc<dyn ReportExporter>,
    storage: Arc<dyn ReportStorage>,
}

impl ExportReportHandler {
    pub fn new(exporter: Arc<dyn ReportExporter>, storage: Arc<dyn ReportStorage>) -> Self {
        Self { exporter, storage }
    }

    /// Writes the results and calculation steps, returning the stored paths.
    pub fn handle(&self, report: &AnalysisReport) -> Result<Vec<PathBuf>, AnalysisError> {
        let documents = self.exporter.export(&report.outcome)?;

        let mut paths = Vec::with_capacity(documents.len());
        for document in &documents {
            let path = self.storage.store(document)?;
            info!(
                analysis_id = %report.analysis_id,
                format = %document.format,
                path = %path.display(),
                "Report exported"
            );
            paths.push(path);
        }

        Ok(paths)
    }
}
