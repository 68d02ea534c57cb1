//! Analysis handlers.
//!
//! - `RunAnalysisHandler` - Applies policy checks and runs the TOPSIS engine
//! - `ExportReportHandler` - Renders a finished analysis and stores the documents

mod errors;
mod export_report;
mod run_analysis;

pub use errors::AnalysisError;
pub use export_report::ExportReportHandler;
pub use run_analysis::{AnalysisReport, RunAnalysisCommand, RunAnalysisHandler};
