//! Scorer: combines a profile and one job's facts into a `MatchResult`.
//!
//! The numeric part is a pure function of its inputs. The rationale comes from
//! a separate oracle call and never feeds back into the score.

use tracing::warn;

use crate::llm_client::prompts::fill_template;
use crate::llm_client::Oracle;
use crate::models::job::Job;
use crate::models::match_result::{DetailScores, MatchResult};
use crate::models::profile::{JobFacts, Profile};
use crate::scoring::prompts::{RATIONALE_PROMPT_TEMPLATE, RATIONALE_SYSTEM, RATIONALE_UNAVAILABLE};
use crate::scoring::weights::{
    compute_combined_score, round3, ScoringWeights, FIXED_EXPERIENCE_SCORE, LANGUAGE_MATCH_SCORE,
    LANGUAGE_MISMATCH_SCORE, NEUTRAL_LANGUAGE_SCORE, NEUTRAL_REQUIRED_SKILL_SCORE,
    NICE_SKILL_SATURATION,
};

pub mod prompts;
pub mod weights;

/// Unrounded per-factor scores.
///
/// `exp_score` is a constant: `Profile::years_experience` and
/// `JobFacts::experience_level` are carried but not compared.
pub fn compute_detail_scores(profile: &Profile, facts: &JobFacts) -> DetailScores {
    let skills = profile.skill_keys();

    let skill_required_score = if facts.required_skills.is_empty() {
        NEUTRAL_REQUIRED_SKILL_SCORE
    } else {
        let covered = facts
            .required_skills
            .iter()
            .filter(|s| skills.contains(&s.to_lowercase()))
            .count();
        covered as f64 / facts.required_skills.len() as f64
    };

    let nice_covered = facts
        .nice_to_have_skills
        .iter()
        .filter(|s| skills.contains(&s.to_lowercase()))
        .count();
    let skill_nice_score = (nice_covered as f64 / NICE_SKILL_SATURATION as f64).min(1.0);

    let lang_score = if facts.languages.is_empty() {
        NEUTRAL_LANGUAGE_SCORE
    } else {
        let spoken = profile.language_keys();
        if facts
            .languages
            .iter()
            .all(|l| spoken.contains(&l.to_lowercase()))
        {
            LANGUAGE_MATCH_SCORE
        } else {
            LANGUAGE_MISMATCH_SCORE
        }
    };

    DetailScores {
        skill_required_score,
        skill_nice_score,
        exp_score: FIXED_EXPERIENCE_SCORE,
        lang_score,
    }
}

/// Total from unrounded details, rounded to 3 decimals.
pub fn compute_total_score(details: &DetailScores, weights: &ScoringWeights) -> f64 {
    round3(compute_combined_score(details, weights))
}

fn round_details(details: &DetailScores) -> DetailScores {
    DetailScores {
        skill_required_score: round3(details.skill_required_score),
        skill_nice_score: round3(details.skill_nice_score),
        exp_score: round3(details.exp_score),
        lang_score: round3(details.lang_score),
    }
}

/// Scores one job and attaches its rationale.
///
/// A failed rationale call is logged and replaced with a placeholder; it
/// never drops the result.
pub async fn score_job(
    oracle: &dyn Oracle,
    profile: &Profile,
    job: Job,
    facts: &JobFacts,
) -> MatchResult {
    let details = compute_detail_scores(profile, facts);
    let total_score = compute_total_score(&details, &ScoringWeights::default());

    let reasoning = match generate_rationale(oracle, profile, facts).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Rationale unavailable for {}: {e}", job.link);
            RATIONALE_UNAVAILABLE.to_string()
        }
    };

    MatchResult {
        job,
        total_score,
        detail_scores: round_details(&details),
        reasoning,
    }
}

async fn generate_rationale(
    oracle: &dyn Oracle,
    profile: &Profile,
    facts: &JobFacts,
) -> Result<String, crate::llm_client::LlmError> {
    let prompt = fill_template(
        RATIONALE_PROMPT_TEMPLATE,
        &[
            ("profile", profile_summary(profile).as_str()),
            ("job", facts_summary(facts).as_str()),
        ],
    );
    oracle.complete_text(&prompt, RATIONALE_SYSTEM).await
}

fn profile_summary(profile: &Profile) -> String {
    format!(
        "skills: {}\nyears_experience: {}\nlanguages: {}\ndomains: {}",
        profile.skills.join(", "),
        profile.years_experience,
        profile.languages.join(", "),
        profile.domains.join(", ")
    )
}

fn facts_summary(facts: &JobFacts) -> String {
    format!(
        "title: {}\nrequired_skills: {}\nnice_to_have_skills: {}\nexperience_level: {}\nlanguages_required: {}\nlocation_type: {}\ndomain: {}",
        facts.title,
        facts.required_skills.join(", "),
        facts.nice_to_have_skills.join(", "),
        facts.experience_level.as_str(),
        facts.languages.join(", "),
        facts.location_type.as_str(),
        facts.domain
    )
}
