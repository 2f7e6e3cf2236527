//! One batch pass: resume → profile → jobs → facts → scores → ranking.

use std::path::Path;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::errors::PipelineError;
use crate::extraction::{extract_job_facts, extract_profile};
use crate::ingest::collect_jobs;
use crate::llm_client::Oracle;
use crate::models::match_result::MatchResult;
use crate::models::profile::Profile;
use crate::ranking::rank_results;
use crate::resume::load_resume_text;
use crate::scoring::score_job;
use crate::sources::JobSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub records_fetched: usize,
    pub jobs_after_dedup: usize,
    pub jobs_scored: usize,
    pub jobs_skipped: usize,
}

#[derive(Debug)]
pub struct DigestRun {
    pub profile: Profile,
    /// Every scored job, best first. Truncation to top-K happens at the report.
    pub results: Vec<MatchResult>,
    pub stats: RunStats,
}

pub async fn run_pipeline(
    oracle: &dyn Oracle,
    source: &dyn JobSource,
    resume_path: &Path,
    config: &PipelineConfig,
    now: DateTime<Utc>,
) -> Result<DigestRun, PipelineError> {
    if config.queries.is_empty() {
        return Err(PipelineError::Config("no job queries configured".to_string()));
    }

    let resume_text = load_resume_text(resume_path)?;
    let profile = extract_profile(oracle, &resume_text)
        .await
        .map_err(PipelineError::ProfileExtraction)?;
    info!(
        "Profile extracted: {} skills, {} languages, {:.1} years",
        profile.skills.len(),
        profile.languages.len(),
        profile.years_experience
    );

    let collected = collect_jobs(source, config, now).await?;
    let jobs_after_dedup = collected.jobs.len();

    info!(
        "Scoring {} jobs (concurrency {})",
        jobs_after_dedup, config.oracle_concurrency
    );
    let profile_ref = &profile;
    let mut scored: Vec<(usize, MatchResult)> = stream::iter(collected.jobs.into_iter().enumerate())
        .map(|(index, job)| async move {
            match extract_job_facts(oracle, &job).await {
                Ok(facts) => Some((index, score_job(oracle, profile_ref, job, &facts).await)),
                Err(e) => {
                    warn!("Skipping {} ({}): fact extraction failed: {e}", job.link, job.title);
                    None
                }
            }
        })
        .buffer_unordered(config.oracle_concurrency.max(1))
        .filter_map(|outcome| async move { outcome })
        .collect()
        .await;

    // Completion order is arbitrary; restore first-seen order so ranking ties stay stable.
    scored.sort_by_key(|(index, _)| *index);
    let results = rank_results(scored.into_iter().map(|(_, result)| result).collect());

    let stats = RunStats {
        records_fetched: collected.records_fetched,
        jobs_after_dedup,
        jobs_scored: results.len(),
        jobs_skipped: jobs_after_dedup - results.len(),
    };

    Ok(DigestRun {
        profile,
        results,
        stats,
    })
}
