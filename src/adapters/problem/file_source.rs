//! File Problem Source - Implementation of ProblemSource for YAML/JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::topsis::{DecisionProblem, ProblemDocument};
use crate::ports::{ProblemSource, SourceError};

/// Maximum problem file size accepted (1 MB).
const MAX_FILE_SIZE_BYTES: u64 = 1024 * 1024;

/// Supported problem file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFileFormat {
    Yaml,
    Json,
}

impl ProblemFileFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(ProblemFileFormat::Yaml),
            "json" => Ok(ProblemFileFormat::Json),
            _ => Err(SourceError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses a problem document in this format and validates it.
    pub fn parse(&self, content: &str) -> Result<DecisionProblem, SourceError> {
        let document: ProblemDocument = match self {
            ProblemFileFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| SourceError::malformed(e.to_string()))?
            }
            ProblemFileFormat::Json => {
                serde_json::from_str(content).map_err(|e| SourceError::malformed(e.to_string()))?
            }
        };
        Ok(DecisionProblem::try_from(document)?)
    }
}

/// Reads a decision problem from a local file.
///
/// # Usage
///
/// ```rust,ignore
/// let source = FileProblemSource::new("cars.yaml");
/// let problem = source.load()?;
/// ```
#[derive(Debug, Clone)]
pub struct FileProblemSource {
    path: PathBuf,
}

impl FileProblemSource {
    /// Creates a source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProblemSource for FileProblemSource {
    fn load(&self) -> Result<DecisionProblem, SourceError> {
        let format = ProblemFileFormat::from_path(&self.path)?;
        let location = self.path.display().to_string();

        let size = fs::metadata(&self.path)
            .map_err(|e| SourceError::unavailable(&location, e.to_string()))?
            .len();
        if size > MAX_FILE_SIZE_BYTES {
            return Err(SourceError::unavailable(
                &location,
                format!("file is {} bytes, limit is {}", size, MAX_FILE_SIZE_BYTES),
            ));
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| SourceError::unavailable(&location, e.to_string()))?;
        tracing::debug!(path = %location, ?format, bytes = size, "Loaded problem file");

        format.parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
