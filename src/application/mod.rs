//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers are the only place that logs; the domain stays pure.

pub mod handlers;

pub use handlers::{
    AnalysisError, AnalysisReport, ExportReportHandler, RunAnalysisCommand, RunAnalysisHandler,
};
