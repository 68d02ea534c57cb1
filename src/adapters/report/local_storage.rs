//! Local Report Storage - Implementation of ReportStorage.
//!
//! Writes exported documents into a single output directory using a
//! write-to-temp-then-rename sequence so a crash never leaves a half
//! written export behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ports::{ExportError, ExportedDocument, ReportStorage};

/// Stores exported documents in a local directory.
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalReportStorage::new("./out");
/// let path = storage.store(&document)?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalReportStorage {
    directory: PathBuf,
}

impl LocalReportStorage {
    /// Creates storage rooted at the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn ensure_directory(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.directory).map_err(|e| {
            ExportError::io_error(format!(
                "Failed to create output directory {}: {}",
                self.directory.display(),
                e
            ))
        })
    }
}

impl ReportStorage for LocalReportStorage {
    fn store(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError> {
        self.ensure_directory()?;

        let final_path = self.directory.join(&document.filename);
        let temp_path = self.directory.join(format!("{}.tmp", document.filename));

        let mut file = fs::File::create(&temp_path).map_err(|e| {
            ExportError::io_error(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.write_all(document.content.as_bytes()).map_err(|e| {
            ExportError::io_error(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.sync_all().map_err(|e| {
            ExportError::io_error(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).map_err(|e| {
            ExportError::io_error(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %final_path.display(), bytes = document.content.len(), "Stored report");
        Ok(final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ExportFormat;
    use tempfile::TempDir;

    fn document() -> ExportedDocument {
        ExportedDocument::new(
            "Alternative,TOPSIS Score,Rank\nA,1,1\n".to_string(),
            ExportFormat::Csv,
            "topsis_results",
        )
    }

    #[test]
    fn store_writes_content() {
        let temp = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp.path());

        let path = storage.store(&document()).unwrap();

        assert_eq!(path, temp.path().join("topsis_results.csv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), document().content);
    }

    #[test]
    fn store_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("reports").join("cars");
        let storage = LocalReportStorage::new(&nested);

        storage.store(&document()).unwrap();

        assert!(nested.is_dir());
        assert_eq!(storage.directory(), nested.as_path());
    }

    #[test]
    fn store_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp.path());

        storage.store(&document()).unwrap();

        assert!(!temp.path().join("topsis_results.csv.tmp").exists());
    }

    #[test]
    fn store_overwrites_previous_export() {
        let temp = TempDir::new().unwrap();
        let storage = LocalReportStorage::new(temp.path());
        storage.store(&document()).unwrap();

        let updated = ExportedDocument::new("x\n".to_string(), ExportFormat::Csv, "topsis_results");
        let path = storage.store(&updated).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "x\n");
    }
}
