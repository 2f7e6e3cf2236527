//! Apify actor-run backend: start a run, poll it to completion, read its dataset.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::job::RawRecord;
use crate::sources::{records_from_values, FetchRequest, JobSource, SourceError};

pub const APIFY_API_URL: &str = "https://api.apify.com/v2";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// 30 minutes at the default interval.
pub const DEFAULT_MAX_POLLS: u32 = 360;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActorInput<'a> {
    search_query: &'a str,
    location: &'a str,
    posted_within: u32,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct RunStarted {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunState {
    status: String,
    default_dataset_id: Option<String>,
}

/// Where a run stands after one status poll.
#[derive(Debug, PartialEq, Eq)]
enum RunStatus {
    Running,
    Succeeded,
    Failed(String),
}

impl RunStatus {
    fn from_api(status: &str) -> Self {
        match status {
            "SUCCEEDED" => Self::Succeeded,
            "FAILED" | "ABORTED" | "TIMED-OUT" | "TIMED_OUT" => Self::Failed(status.to_string()),
            _ => Self::Running,
        }
    }
}

#[derive(Clone)]
pub struct ApifyJobSource {
    client: Client,
    api_token: String,
    actor_id: String,
    base_url: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl ApifyJobSource {
    pub fn new(api_token: String, actor_id: String) -> Result<Self, SourceError> {
        Self::with_base_url(api_token, actor_id, APIFY_API_URL.to_string())
    }

    pub fn with_base_url(
        api_token: String,
        actor_id: String,
        base_url: String,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(60)).build()?,
            api_token,
            actor_id,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        })
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Status checks allowed before a still-running actor counts as failed.
    pub fn with_max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = max_polls.max(1);
        self
    }

    async fn start_run(&self, request: &FetchRequest) -> Result<String, SourceError> {
        let url = format!("{}/acts/{}/runs", self.base_url, self.actor_id);
        let input = ActorInput {
            search_query: &request.query,
            location: &request.location,
            posted_within: request.posted_within_hours,
            max_results: request.limit,
        };

        let response = self
            .client
            .post(url)
            .query(&[("token", &self.api_token)])
            .json(&input)
            .send()
            .await?;
        let started: Envelope<RunStarted> = read_json(response).await?;
        Ok(started.data.id)
    }

    async fn wait_for_dataset(&self, run_id: &str) -> Result<String, SourceError> {
        let url = format!("{}/actor-runs/{}", self.base_url, run_id);
        let mut polls = 0u32;
        loop {
            polls += 1;
            let response = self
                .client
                .get(&url)
                .query(&[("token", &self.api_token)])
                .send()
                .await?;
            let state: Envelope<RunState> = read_json(response).await?;

            match RunStatus::from_api(&state.data.status) {
                RunStatus::Succeeded => {
                    return state.data.default_dataset_id.ok_or_else(|| {
                        SourceError::Malformed(format!("run {run_id} has no default dataset"))
                    })
                }
                RunStatus::Failed(status) => {
                    return Err(SourceError::RunFailed {
                        run_id: run_id.to_string(),
                        status,
                    })
                }
                RunStatus::Running if polls >= self.max_polls => {
                    warn!(
                        "Apify run {} still {} after {} polls",
                        run_id, state.data.status, polls
                    );
                    return Err(SourceError::RunFailed {
                        run_id: run_id.to_string(),
                        status: format!("{} after {} polls", state.data.status, polls),
                    });
                }
                RunStatus::Running => {
                    debug!("Apify run {} is {}", run_id, state.data.status);
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }

    async fn fetch_items(
        &self,
        dataset_id: &str,
        limit: usize,
    ) -> Result<Vec<RawRecord>, SourceError> {
        let url = format!("{}/datasets/{}/items", self.base_url, dataset_id);
        let response = self
            .client
            .get(url)
            .query(&[("token", self.api_token.as_str())])
            .query(&[("limit", limit)])
            .send()
            .await?;
        let items: Vec<serde_json::Value> = read_json(response).await?;
        Ok(records_from_values(items))
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SourceError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(SourceError::Api {
            status: status.as_u16(),
            message,
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl JobSource for ApifyJobSource {
    fn name(&self) -> &'static str {
        "apify"
    }

    async fn fetch_jobs(&self, request: &FetchRequest) -> Result<Vec<RawRecord>, SourceError> {
        let run_id = self.start_run(request).await?;
        info!("Started Apify run {} for query '{}'", run_id, request.query);

        let dataset_id = self.wait_for_dataset(&run_id).await?;
        let records = self.fetch_items(&dataset_id, request.limit).await?;
        info!(
            "Apify run {} returned {} records for query '{}'",
            run_id,
            records.len(),
            request.query
        );
        Ok(records)
    }
}
