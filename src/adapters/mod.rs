//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `problem` - Problem file readers (YAML, JSON)
//! - `report` - Report exporters (CSV, JSON) and local storage

pub mod problem;
pub mod report;

pub use problem::{FileProblemSource, ProblemFileFormat};
pub use report::{exporter_for, CsvReportExporter, JsonReportExporter, LocalReportStorage};
