//! Acquisition boundary: run every query, normalize, then dedup across queries.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::ingest::dedup::dedup_by_link;
use crate::ingest::normalize::{normalize_record, RecencyWindow};
use crate::models::job::Job;
use crate::sources::{FetchRequest, JobSource, SourceError};

pub mod dedup;
pub mod normalize;

#[derive(Debug)]
pub struct CollectedJobs {
    /// Unique by link, in first-seen order across queries.
    pub jobs: Vec<Job>,
    pub records_fetched: usize,
    pub jobs_normalized: usize,
}

/// Fetches every configured query in order. A failed query fails the whole
/// collection; dropped records do not.
pub async fn collect_jobs(
    source: &dyn JobSource,
    config: &PipelineConfig,
    now: DateTime<Utc>,
) -> Result<CollectedJobs, SourceError> {
    let window = RecencyWindow::new(now, config.posted_within_hours);
    let mut normalized = Vec::new();
    let mut records_fetched = 0usize;

    for query in &config.queries {
        let request = FetchRequest {
            query: query.clone(),
            location: config.location.clone(),
            posted_within_hours: config.posted_within_hours,
            limit: config.max_jobs_per_query,
        };
        let records = source.fetch_jobs(&request).await?;
        records_fetched += records.len();

        let before = normalized.len();
        normalized.extend(records.iter().filter_map(|r| normalize_record(r, &window)));
        debug!(
            "Query '{}' via {}: {} records, {} kept",
            query,
            source.name(),
            records.len(),
            normalized.len() - before
        );
    }

    let jobs_normalized = normalized.len();
    let jobs = dedup_by_link(normalized);
    info!(
        "Collected {} unique jobs ({} records fetched, {} valid before dedup)",
        jobs.len(),
        records_fetched,
        jobs_normalized
    );

    Ok(CollectedJobs {
        jobs,
        records_fetched,
        jobs_normalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use serde_json::json;

    use crate::models::job::RawRecord;

    /// Returns canned records per query.
    struct CannedSource;

    fn raw(value: serde_json::Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[async_trait]
    impl JobSource for CannedSource {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn fetch_jobs(&self, request: &FetchRequest) -> Result<Vec<RawRecord>, SourceError> {
            let records = match request.query.as_str() {
                "Data Scientist" => vec![
                    raw(json!({"title": "DS", "companyName": "A", "description": "d", "url": "https://x/1"})),
                    raw(json!({"title": "No link", "companyName": "A", "description": "d"})),
                    raw(json!({"title": "DS2", "companyName": "B", "description": "d", "url": "https://x/2"})),
                ],
                "LLM" => vec![
                    raw(json!({"position": "LLM Eng", "company": "C", "descriptionText": "d", "jobUrl": "https://x/1"})),
                    raw(json!({"title": "Old", "companyName": "D", "description": "d", "url": "https://x/3", "listedAt": "2020-01-01T00:00:00Z"})),
                    raw(json!({"title": "LLM2", "companyName": "E", "description": "d", "url": "https://x/4"})),
                ],
                "broken" => {
                    return Err(SourceError::Malformed("backend down".to_string()));
                }
                _ => vec![],
            };
            Ok(records.into_iter().take(request.limit).collect())
        }
    }

    fn config(queries: &[&str]) -> PipelineConfig {
        PipelineConfig {
            queries: queries.iter().map(|q| q.to_string()).collect(),
            ..PipelineConfig::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_collect_dedups_across_queries() {
        let collected = collect_jobs(&CannedSource, &config(&["Data Scientist", "LLM"]), now())
            .await
            .unwrap();

        let links: Vec<&str> = collected.jobs.iter().map(|j| j.link.as_str()).collect();
        assert_eq!(links, vec!["https://x/1", "https://x/2", "https://x/4"]);
        assert_eq!(collected.jobs[0].title, "DS");
        assert_eq!(collected.records_fetched, 6);
        assert_eq!(collected.jobs_normalized, 4);
    }

    #[tokio::test]
    async fn test_failed_query_fails_collection() {
        let result = collect_jobs(&CannedSource, &config(&["Data Scientist", "broken"]), now()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_limit_is_passed_to_source() {
        let mut cfg = config(&["Data Scientist"]);
        cfg.max_jobs_per_query = 1;
        let collected = collect_jobs(&CannedSource, &cfg, now()).await.unwrap();
        assert_eq!(collected.records_fetched, 1);
        assert_eq!(collected.jobs.len(), 1);
    }
}
