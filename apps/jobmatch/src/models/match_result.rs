use serde::Serialize;

use crate::models::job::Job;

/// Per-factor scores, each rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetailScores {
    pub skill_required_score: f64,
    pub skill_nice_score: f64,
    pub exp_score: f64,
    pub lang_score: f64,
}

/// One scored and explained pairing of a job with the candidate profile.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub job: Job,
    /// In [0, 1], rounded to 3 decimals.
    pub total_score: f64,
    pub detail_scores: DetailScores,
    pub reasoning: String,
}
