//! Problem adapters - Loading decision problems from outside the process.
//!
//! - `FileProblemSource` - Reads YAML or JSON problem files

mod file_source;

pub use file_source::{FileProblemSource, ProblemFileFormat};
