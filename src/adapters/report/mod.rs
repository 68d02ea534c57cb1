//! Report adapters - Rendering and storing analysis output.
//!
//! - `CsvReportExporter` - Comma-separated results and labeled step sections
//! - `JsonReportExporter` - Pretty-printed JSON documents
//! - `LocalReportStorage` - Writes documents into a local directory

mod csv_exporter;
mod json_exporter;
mod local_storage;

pub use csv_exporter::CsvReportExporter;
pub use json_exporter::JsonReportExporter;
pub use local_storage::LocalReportStorage;

use crate::ports::{ExportFormat, ReportExporter};

/// Returns the exporter for a format.
pub fn exporter_for(format: ExportFormat, precision: u32) -> Box<dyn ReportExporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvReportExporter::new(precision)),
        ExportFormat::Json => Box::new(JsonReportExporter::new(precision)),
    }
}
