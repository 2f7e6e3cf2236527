use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// One unvalidated posting as returned by an acquisition source.
pub type RawRecord = Map<String, Value>;

/// A validated job posting.
///
/// Built only by `ingest::normalize::normalize_record`, so `title`, `company`,
/// `description` and `link` are always non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    pub posted_at: Option<DateTime<Utc>>,
    pub link: String,
    /// Original record, kept for diagnostics only.
    #[serde(skip_serializing)]
    pub source_raw: RawRecord,
}
