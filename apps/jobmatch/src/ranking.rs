//! Ranker: orders results by total score, best first.

use crate::models::match_result::MatchResult;

/// Sorts descending by `total_score`. The sort is stable, so equal scores
/// keep their input (first-seen) order. Nothing is dropped; callers slice
/// with `top_k` at the reporting boundary.
pub fn rank_results(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    results
}

pub fn top_k(ranked: &[MatchResult], k: usize) -> &[MatchResult] {
    &ranked[..k.min(ranked.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::match_result::DetailScores;
    use crate::test_support::sample_job;

    fn result(link: &str, total_score: f64) -> MatchResult {
        MatchResult {
            job: sample_job(link, "Engineer"),
            total_score,
            detail_scores: DetailScores {
                skill_required_score: 0.5,
                skill_nice_score: 0.0,
                exp_score: 0.7,
                lang_score: 0.7,
            },
            reasoning: String::new(),
        }
    }

    fn links(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.job.link.as_str()).collect()
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ranked = rank_results(vec![
            result("job0", 0.9),
            result("job1", 0.4),
            result("job2", 0.9),
        ]);
        assert_eq!(links(&ranked), vec!["job0", "job2", "job1"]);
    }

    #[test]
    fn test_descending_order() {
        let ranked = rank_results(vec![
            result("low", 0.1),
            result("high", 0.95),
            result("mid", 0.5),
        ]);
        assert_eq!(links(&ranked), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_stability_across_many_ties() {
        let input: Vec<MatchResult> = (0..20)
            .map(|i| result(&format!("job{i}"), if i % 2 == 0 { 0.6 } else { 0.3 }))
            .collect();
        let ranked = rank_results(input);
        let evens: Vec<String> = (0..20).step_by(2).map(|i| format!("job{i}")).collect();
        let odds: Vec<String> = (1..20).step_by(2).map(|i| format!("job{i}")).collect();
        let expected: Vec<&str> = evens.iter().chain(odds.iter()).map(String::as_str).collect();
        assert_eq!(links(&ranked), expected);
    }

    #[test]
    fn test_rank_returns_everything() {
        let ranked = rank_results((0..7).map(|i| result(&format!("j{i}"), 0.5)).collect());
        assert_eq!(ranked.len(), 7);
    }

    #[test]
    fn test_top_k_slices() {
        let ranked = rank_results(vec![result("a", 0.3), result("b", 0.8)]);
        assert_eq!(links(top_k(&ranked, 1)), vec!["b"]);
        assert_eq!(top_k(&ranked, 10).len(), 2);
        assert!(top_k(&ranked, 0).is_empty());
    }
}
