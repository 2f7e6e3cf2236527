use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::models::job::RawRecord;
use crate::sources::{records_from_values, FetchRequest, JobSource, SourceError};

/// Serves raw records from a JSON array on disk. The query is ignored, so
/// every query returns the same records (up to `limit`).
pub struct FileJobSource {
    path: PathBuf,
    records: Vec<RawRecord>,
}

impl FileJobSource {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path)?;
        let values: Vec<serde_json::Value> = serde_json::from_str(&text)?;
        let records = records_from_values(values);
        info!("Loaded {} raw records from {}", records.len(), path.display());
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JobSource for FileJobSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_jobs(&self, request: &FetchRequest) -> Result<Vec<RawRecord>, SourceError> {
        Ok(self.records.iter().take(request.limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn request(limit: usize) -> FetchRequest {
        FetchRequest {
            query: "anything".to_string(),
            location: "Anywhere".to_string(),
            posted_within_hours: 24,
            limit,
        }
    }

    #[tokio::test]
    async fn test_file_source_respects_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "a"}}, {{"title": "b"}}, 42, {{"title": "c"}}]"#
        )
        .unwrap();

        let source = FileJobSource::load(file.path()).unwrap();
        assert_eq!(source.fetch_jobs(&request(10)).await.unwrap().len(), 3);
        let limited = source.fetch_jobs(&request(2)).await.unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[1]["title"], "b");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileJobSource::load("/definitely/not/here.json")
            .err()
            .expect("load should fail");
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn test_non_array_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "a"}}"#).unwrap();
        let err = FileJobSource::load(file.path()).err().expect("load should fail");
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
