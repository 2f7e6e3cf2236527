//! Job acquisition backends.
//!
//! The pipeline only sees `JobSource`; swapping Apify for a file (or anything
//! else) does not touch normalization, scoring or ranking.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::job::RawRecord;

pub mod apify;
pub mod file;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Actor run {run_id} finished with status {status}")]
    RunFailed { run_id: String, status: String },

    #[error("Unexpected response shape: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One acquisition call.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub query: String,
    pub location: String,
    pub posted_within_hours: u32,
    pub limit: usize,
}

#[async_trait]
pub trait JobSource: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    async fn fetch_jobs(&self, request: &FetchRequest) -> Result<Vec<RawRecord>, SourceError>;
}

/// Keeps only JSON objects from a dataset array; anything else is not a record.
pub(crate) fn records_from_values(values: Vec<serde_json::Value>) -> Vec<RawRecord> {
    values
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}
