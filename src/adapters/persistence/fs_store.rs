//! Implements ReportStore on the local filesystem.
//!
//! Reads the static preamble (`static.md`) and writes the digest (`now.md`).

use crate::domain::{DigestError, Report};
use crate::ports::ReportStore;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

pub struct FsReportStore {
    static_path: PathBuf,
    output_path: PathBuf,
}

impl FsReportStore {
    pub fn new(static_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            static_path: static_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ReportStore for FsReportStore {
    async fn read_static(&self) -> Result<String, DigestError> {
        fs::read_to_string(&self.static_path).await.map_err(|e| {
            DigestError::Persist(format!(
                "unable to read {}: {}",
                self.static_path.display(),
                e
            ))
        })
    }

    /// Write-replace: temp file, sync_all, then rename over the target, so a
    /// crash mid-write never leaves a truncated document.
    async fn write_report(&self, report: &Report) -> Result<(), DigestError> {
        let temp_path = self.output_path.with_extension("md.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DigestError::Persist(format!("create temp file: {}", e)))?;
        f.write_all(report.as_str().as_bytes())
            .await
            .map_err(|e| DigestError::Persist(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DigestError::Persist(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.output_path)
            .await
            .map_err(|e| DigestError::Persist(format!("atomic rename failed: {}", e)))?;

        let abs_path = self
            .output_path
            .canonicalize()
            .unwrap_or_else(|_| self.output_path.clone());
        info!(
            path = %abs_path.display(),
            bytes = report.as_str().len(),
            "wrote report"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_static_and_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let static_path = dir.path().join("static.md");
        let output_path = dir.path().join("now.md");
        tokio::fs::write(&static_path, "# Now\n").await.unwrap();

        let store = FsReportStore::new(&static_path, &output_path);
        assert_eq!(store.read_static().await.unwrap(), "# Now\n");

        store
            .write_report(&Report::new("# Now\n\nbody".to_string()))
            .await
            .unwrap();
        let written = tokio::fs::read_to_string(&output_path).await.unwrap();
        assert_eq!(written, "# Now\n\nbody");
        assert!(!dir.path().join("now.md.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_static_is_persist_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsReportStore::new(dir.path().join("absent.md"), dir.path().join("now.md"));
        let err = store.read_static().await.unwrap_err();
        assert!(matches!(err, DigestError::Persist(_)));
    }
}
