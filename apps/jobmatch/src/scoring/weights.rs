use crate::models::match_result::DetailScores;

/// Used for `skill_required_score` when a job lists no required skills.
pub const NEUTRAL_REQUIRED_SKILL_SCORE: f64 = 0.5;
/// Used for `lang_score` when a job states no language requirement.
pub const NEUTRAL_LANGUAGE_SCORE: f64 = 0.7;
pub const LANGUAGE_MATCH_SCORE: f64 = 1.0;
pub const LANGUAGE_MISMATCH_SCORE: f64 = 0.3;
/// Experience is not compared yet; every job gets this value.
pub const FIXED_EXPERIENCE_SCORE: f64 = 0.7;
/// Matched nice-to-have skills beyond this count add nothing.
pub const NICE_SKILL_SATURATION: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill_required: f64,
    pub skill_nice: f64,
    pub experience: f64,
    pub language: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_required: 0.5,
            skill_nice: 0.2,
            experience: 0.2,
            language: 0.1,
        }
    }
}

/// Weighted total: 0.5*required + 0.2*nice + 0.2*exp + 0.1*lang, clamped to [0, 1].
pub fn compute_combined_score(scores: &DetailScores, weights: &ScoringWeights) -> f64 {
    (weights.skill_required * scores.skill_required_score
        + weights.skill_nice * scores.skill_nice_score
        + weights.experience * scores.exp_score
        + weights.language * scores.lang_score)
        .clamp(0.0, 1.0)
}

/// Rounds half away from zero to 3 decimals.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
