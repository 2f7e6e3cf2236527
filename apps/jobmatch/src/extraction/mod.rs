//! Fact Extractor: one oracle exchange per extracted object.
//!
//! No retries here: the oracle client owns its retry policy, and any error it
//! returns is final for this extraction.

use serde_json::Value;
use thiserror::Error;

use crate::extraction::payload::{JobFactsPayload, ProfilePayload};
use crate::extraction::prompts::{
    JOB_FACTS_PROMPT_TEMPLATE, JOB_FACTS_SYSTEM, PROFILE_PROMPT_TEMPLATE, PROFILE_SYSTEM,
};
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{LlmError, Oracle};
use crate::models::job::Job;
use crate::models::profile::{JobFacts, Profile};

pub mod payload;
pub mod prompts;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("oracle call failed: {0}")]
    Oracle(#[from] LlmError),

    #[error("oracle response is not a JSON object")]
    NotAnObject,

    #[error("oracle response could not be read: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Derives a `Profile` from resume text.
pub async fn extract_profile(
    oracle: &dyn Oracle,
    resume_text: &str,
) -> Result<Profile, ExtractionError> {
    let prompt = fill_template(PROFILE_PROMPT_TEMPLATE, &[("resume_text", resume_text)]);
    let system = format!("{PROFILE_SYSTEM} {JSON_ONLY_INSTRUCTION}");

    let value = oracle.complete_json(&prompt, &system).await?;
    let payload: ProfilePayload = from_object(value)?;
    Ok(payload.into_profile())
}

/// Derives `JobFacts` for one job.
pub async fn extract_job_facts(
    oracle: &dyn Oracle,
    job: &Job,
) -> Result<JobFacts, ExtractionError> {
    let prompt = fill_template(
        JOB_FACTS_PROMPT_TEMPLATE,
        &[
            ("title", job.title.as_str()),
            ("company", job.company.as_str()),
            ("location", job.location.as_deref().unwrap_or("unspecified")),
            ("description", job.description.as_str()),
        ],
    );
    let system = format!("{JOB_FACTS_SYSTEM} {JSON_ONLY_INSTRUCTION}");

    let value = oracle.complete_json(&prompt, &system).await?;
    let payload: JobFactsPayload = from_object(value)?;
    Ok(payload.into_job_facts(job))
}

fn from_object<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ExtractionError> {
    if !value.is_object() {
        return Err(ExtractionError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}
