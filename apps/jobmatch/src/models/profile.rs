use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Candidate profile extracted from resume text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Display casing is kept; matching goes through `skill_keys`.
    pub skills: Vec<String>,
    pub years_experience: f64,
    pub languages: Vec<String>,
    /// Informational only, not part of the numeric score.
    pub domains: Vec<String>,
}

impl Profile {
    /// Lowercased skill set used for case-insensitive matching.
    pub fn skill_keys(&self) -> HashSet<String> {
        self.skills.iter().map(|s| s.to_lowercase()).collect()
    }

    pub fn language_keys(&self) -> HashSet<String> {
        self.languages.iter().map(|l| l.to_lowercase()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
    Principal,
    Mixed,
    #[default]
    Unknown,
}

impl ExperienceLevel {
    /// Case-insensitive lookup; anything unrecognised is `Unknown`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "junior" => Self::Junior,
            "mid" => Self::Mid,
            "senior" => Self::Senior,
            "lead" => Self::Lead,
            "principal" => Self::Principal,
            "mixed" => Self::Mixed,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
            Self::Lead => "lead",
            Self::Principal => "principal",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Remote,
    Hybrid,
    Onsite,
    #[default]
    Unspecified,
}

impl LocationType {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "remote" => Self::Remote,
            "hybrid" => Self::Hybrid,
            "onsite" | "on-site" => Self::Onsite,
            _ => Self::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
            Self::Onsite => "onsite",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Requirements extracted from one job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFacts {
    pub title: String,
    pub required_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    /// Empty means the posting states no language requirement.
    pub languages: Vec<String>,
    pub location_type: LocationType,
    pub domain: String,
}

pub const DEFAULT_DOMAIN: &str = "General";
