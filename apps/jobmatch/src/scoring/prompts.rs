// Prompt constants for match rationales.

pub const RATIONALE_SYSTEM: &str = "You explain job fit to a candidate briefly.";

/// Replace `{profile}` and `{job}` with the structured summaries before sending.
pub const RATIONALE_PROMPT_TEMPLATE: &str = r#"Given this profile and job, explain in 2-3 sentences why this job is or isn't a good fit.

Profile:
{profile}

Job:
{job}

Use concise English. Do not restate the numeric score."#;

/// Stands in for a rationale the oracle could not produce.
pub const RATIONALE_UNAVAILABLE: &str = "No explanation available for this match.";
