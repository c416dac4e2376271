// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use cloudpath_model::RecordSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError(pub String);

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for SourceError {}

/// Where a record set comes from. Every call returns a complete, validated set.
#[async_trait]
pub trait RecordSource: Send + Sync + 'static {
    async fn load(&self) -> Result<RecordSet, SourceError>;

    fn describe(&self) -> String;
}

/// JSON array of records on the local filesystem.
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<RecordSet, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError(format!("read {} failed: {e}", self.path.display())))?;
        RecordSet::from_json_slice(&bytes)
            .map_err(|e| SourceError(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory set, used by tests and embedders that already hold the records.
#[derive(Clone)]
pub struct StaticRecordSource {
    records: Arc<RecordSet>,
}

impl StaticRecordSource {
    #[must_use]
    pub fn new(records: RecordSet) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn load(&self) -> Result<RecordSet, SourceError> {
        Ok(self.records.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("static:{} records", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_a_source_error() {
        let source = FileRecordSource::new(PathBuf::from("/nonexistent/certs.json"));
        let err = source.load().await.expect_err("missing file");
        assert!(err.0.contains("/nonexistent/certs.json"));
        assert_eq!(source.describe(), "file:/nonexistent/certs.json");
    }

    #[tokio::test]
    async fn invalid_json_is_a_source_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("certs.json");
        std::fs::write(&path, b"{not json").expect("write");
        let err = FileRecordSource::new(path).load().await.expect_err("bad json");
        assert!(err.0.contains("certs.json"));
    }
}
