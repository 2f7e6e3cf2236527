//! Markdown digest of ranked matches.

use std::path::{Path, PathBuf};

use crate::models::match_result::MatchResult;
use crate::ranking::top_k;

/// Renders the first `k` of `ranked` as a Markdown report.
/// Only public job and score fields are rendered.
pub fn render_markdown(ranked: &[MatchResult], date: &str, k: usize) -> String {
    let mut md = format!("# Job Recommendations for {date}\n\n");
    md.push_str(&format!("Top {k} matches based on your profile.\n\n"));

    let shown = top_k(ranked, k);
    if shown.is_empty() {
        md.push_str("No matching jobs found for this run.\n");
        return md;
    }

    for (rank, result) in shown.iter().enumerate() {
        let job = &result.job;
        let d = &result.detail_scores;
        md.push_str(&format!("## {}. {} @ {}\n", rank + 1, job.title, job.company));
        if let Some(location) = &job.location {
            md.push_str(&format!("- **Location:** {location}\n"));
        }
        if let Some(posted_at) = job.posted_at {
            md.push_str(&format!(
                "- **Posted at:** {}\n",
                posted_at.format("%Y-%m-%d %H:%M UTC")
            ));
        }
        md.push_str(&format!("- **Score:** {:.3}\n", result.total_score));
        md.push_str(&format!(
            "- **Scores detail:** required={:.3}, nice={:.3}, exp={:.3}, lang={:.3}\n",
            d.skill_required_score, d.skill_nice_score, d.exp_score, d.lang_score
        ));
        md.push_str(&format!("- **Link:** {}\n\n", job.link));
        md.push_str(&format!("**Why this role:** {}\n\n", result.reasoning));
        md.push_str("---\n\n");
    }
    md
}

/// Writes `jobs_report_{date}.md` under `dir`, creating the directory if needed.
pub fn write_report(dir: &Path, date: &str, markdown: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("jobs_report_{date}.md"));
    std::fs::write(&path, markdown)?;
    Ok(path)
}
