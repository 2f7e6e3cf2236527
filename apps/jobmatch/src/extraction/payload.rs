//! Validation step for oracle output.
//!
//! Every default and coercion applied to extracted data lives here:
//! - missing or null keys take their documented defaults;
//! - list fields accept an array (non-string and blank items dropped), a
//!   single string, or nothing;
//! - `years_experience` accepts a number or a numeric string, anything else
//!   (including negative or non-finite values) is 0;
//! - enum fields are matched case-insensitively and fall back to
//!   `unknown` / `unspecified`.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::job::Job;
use crate::models::profile::{ExperienceLevel, JobFacts, LocationType, Profile, DEFAULT_DOMAIN};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfilePayload {
    #[serde(deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient_years")]
    pub years_experience: f64,
    #[serde(deserialize_with = "lenient_list")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub domains: Vec<String>,
}

impl ProfilePayload {
    pub fn into_profile(self) -> Profile {
        Profile {
            skills: dedup_case_insensitive(self.skills),
            years_experience: self.years_experience,
            languages: dedup_case_insensitive(self.languages),
            domains: dedup_case_insensitive(self.domains),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobFactsPayload {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub nice_to_have_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub experience_level: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub location_type: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub domain: Option<String>,
}

impl JobFactsPayload {
    /// Applies the job-side defaults; `job` supplies the fallback title.
    pub fn into_job_facts(self, job: &Job) -> JobFacts {
        JobFacts {
            title: self.title.unwrap_or_else(|| job.title.clone()),
            required_skills: self.required_skills,
            nice_to_have_skills: self.nice_to_have_skills,
            experience_level: self
                .experience_level
                .as_deref()
                .map(ExperienceLevel::parse_lenient)
                .unwrap_or_default(),
            languages: self.languages,
            location_type: self
                .location_type
                .as_deref()
                .map(LocationType::parse_lenient)
                .unwrap_or_default(),
            domain: self.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
        }
    }
}

pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(non_blank).collect(),
        Value::String(_) => non_blank(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

pub fn coerce_years(value: &Value) -> f64 {
    let years = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    years.filter(|y| y.is_finite() && *y >= 0.0).unwrap_or(0.0)
}

fn non_blank(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Keeps the first spelling of each case-insensitive value.
fn dedup_case_insensitive(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.to_lowercase()))
        .collect()
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(string_list(&Value::deserialize(deserializer)?))
}

fn lenient_years<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(coerce_years(&Value::deserialize(deserializer)?))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(non_blank(&Value::deserialize(deserializer)?))
}
