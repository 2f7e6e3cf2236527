use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::sources::apify::DEFAULT_MAX_POLLS;

/// Options the pipeline itself consumes. Passed explicitly into `run_pipeline`.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub queries: Vec<String>,
    pub location: String,
    pub posted_within_hours: u32,
    pub max_jobs_per_query: usize,
    pub top_k: usize,
    /// Upper bound on concurrent per-job oracle exchanges.
    pub oracle_concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            queries: vec![
                "Data Scientist".to_string(),
                "Machine Learning Engineer".to_string(),
                "LLM".to_string(),
            ],
            location: "United States".to_string(),
            posted_within_hours: 24,
            max_jobs_per_query: 800,
            top_k: 15,
            oracle_concurrency: 4,
        }
    }
}

/// Where raw job records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Apify {
        api_token: String,
        actor_id: String,
        max_polls: u32,
    },
    File(PathBuf),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub source: SourceConfig,
    pub pipeline: PipelineConfig,
    pub resume_path: PathBuf,
    pub report_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let source = match get("JOB_SOURCE_FILE") {
            Some(path) => SourceConfig::File(PathBuf::from(path)),
            None => SourceConfig::Apify {
                api_token: require("APIFY_API_TOKEN")?,
                actor_id: require("APIFY_ACTOR_ID")?,
                max_polls: parse_or(&get, "APIFY_MAX_POLLS", DEFAULT_MAX_POLLS)?,
            },
        };

        let defaults = PipelineConfig::default();
        let queries = match get("JOB_QUERIES") {
            Some(raw) => parse_queries(&raw)?,
            None => defaults.queries,
        };

        let pipeline = PipelineConfig {
            queries,
            location: get("JOB_LOCATION").unwrap_or(defaults.location),
            posted_within_hours: parse_or(&get, "POSTED_WITHIN_HOURS", defaults.posted_within_hours)?,
            max_jobs_per_query: parse_or(&get, "MAX_JOBS_PER_QUERY", defaults.max_jobs_per_query)?,
            top_k: parse_or(&get, "TOP_K_JOBS", defaults.top_k)?,
            oracle_concurrency: parse_or(&get, "ORACLE_CONCURRENCY", defaults.oracle_concurrency)?,
        };
        if pipeline.oracle_concurrency == 0 {
            bail!("ORACLE_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            anthropic_api_key: require("ANTHROPIC_API_KEY")?,
            source,
            pipeline,
            resume_path: PathBuf::from(
                get("RESUME_PATH").unwrap_or_else(|| "resume_latest.pdf".to_string()),
            ),
            report_dir: PathBuf::from(get("REPORT_DIR").unwrap_or_else(|| "reports".to_string())),
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_queries(raw: &str) -> Result<Vec<String>> {
    let queries: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect();
    if queries.is_empty() {
        bail!("JOB_QUERIES must name at least one query");
    }
    Ok(queries)
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        None => Ok(default),
    }
}
