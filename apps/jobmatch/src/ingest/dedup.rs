use std::collections::HashSet;

use crate::models::job::Job;

/// Keeps the first occurrence of every `link`, preserving input order.
/// Two jobs sharing a link are the same listing whatever their other fields say.
pub fn dedup_by_link(jobs: Vec<Job>) -> Vec<Job> {
    let mut seen: HashSet<String> = HashSet::with_capacity(jobs.len());
    jobs.into_iter()
        .filter(|job| seen.insert(job.link.clone()))
        .collect()
}
