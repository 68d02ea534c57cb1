//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProblemSource` - Supplies a validated decision problem
//! - `ReportExporter` - Renders ranked results and calculation steps
//! - `ReportStorage` - Persists rendered documents

mod problem_source;
mod report_exporter;

pub use problem_source::{ProblemSource, SourceError};
pub use report_exporter::{
    ExportError, ExportFormat, ExportedDocument, ReportExporter, ReportStorage, RESULTS_BASENAME,
    STEPS_BASENAME,
};
