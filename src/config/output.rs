//! Output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Where and how reports are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives exported reports
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Export format
    #[serde(default)]
    pub format: ExportFormat,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.directory.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("OUTPUT__DIRECTORY"));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            format: ExportFormat::default(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}
