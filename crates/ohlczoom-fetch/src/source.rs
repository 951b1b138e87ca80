//! Sources a series can be loaded from.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::client::{FetchClient, FetchError};
use crate::wire::{SeriesPayload, decode_response};

/// Anything that can produce a validated series.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Loads the series.
    async fn load(&self) -> Result<SeriesPayload, FetchError>;

    /// Human-readable description used in logs and progress output.
    fn describe(&self) -> String;
}

#[async_trait]
impl SeriesSource for FetchClient {
    async fn load(&self) -> Result<SeriesPayload, FetchError> {
        self.fetch_series().await
    }

    fn describe(&self) -> String {
        self.config().url.clone()
    }
}

#[async_trait]
impl<S: SeriesSource + ?Sized> SeriesSource for Box<S> {
    async fn load(&self) -> Result<SeriesPayload, FetchError> {
        (**self).load().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reads the response envelope from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a file source.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeriesSource for FileSource {
    async fn load(&self) -> Result<SeriesPayload, FetchError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::ReadFile {
                path: self.path.clone(),
                source,
            })?;
        decode_response(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_loads_envelope() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"symbol":"msft","data":[
                {{"timestamp":"1","open":1,"high":2,"low":0.5,"close":1.5}}
            ]}}"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let payload = source.load().await.unwrap();
        assert_eq!(payload.series.len(), 1);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_boxed_source_delegates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.json");
        std::fs::write(&path, r#"{"symbol":"AAPL","data":[]}"#).unwrap();

        let source: Box<dyn SeriesSource> = Box::new(FileSource::new(&path));
        assert!(source.load().await.unwrap().series.is_empty());
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));
        assert!(matches!(
            source.load().await,
            Err(FetchError::ReadFile { .. })
        ));
    }
}
