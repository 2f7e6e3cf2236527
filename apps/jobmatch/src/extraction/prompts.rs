// Prompt constants for profile and job-fact extraction.
// The JSON-only fragment from llm_client::prompts is appended at call time.

pub const PROFILE_SYSTEM: &str =
    "You are an assistant that extracts structured information from CVs.";

/// Replace `{resume_text}` before sending.
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"Extract the candidate's profile from the following resume text.

Return a JSON object with exactly these keys:
{
  "skills": ["Python", "SQL"],
  "years_experience": 4.5,
  "languages": ["English", "Chinese"],
  "domains": ["Fintech", "E-commerce", "Ads"]
}

- skills: list of strings
- years_experience: number, approximate total years of professional experience
- languages: list of spoken languages
- domains: list of industry domains

Resume:
"""{resume_text}""""#;

pub const JOB_FACTS_SYSTEM: &str =
    "You are an assistant that extracts structured information from job descriptions.";

/// Replace `{title}`, `{company}`, `{location}` and `{description}` before sending.
pub const JOB_FACTS_PROMPT_TEMPLATE: &str = r#"Extract structured information from this job posting.

Return a JSON object with exactly these keys:
{
  "title": "Senior Data Scientist",
  "required_skills": ["Python", "SQL"],
  "nice_to_have_skills": ["Spark"],
  "experience_level": "senior",
  "languages": ["English"],
  "location_type": "remote",
  "domain": "Fintech"
}

- title: string
- required_skills: list of strings
- nice_to_have_skills: list of strings
- experience_level: one of "junior", "mid", "senior", "lead", "principal", "mixed", "unknown"
- languages: list of required spoken languages, empty if none are stated
- location_type: one of "remote", "hybrid", "onsite", "unspecified"
- domain: string such as "Fintech", "Ads", "E-commerce", or "General"

Job title: {title}
Company: {company}
Location: {location}
Description:
"""{description}""""#;
