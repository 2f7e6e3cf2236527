//! Raw Record Normalizer: maps loosely-shaped acquisition records onto `Job`.
//!
//! Each canonical field is resolved from an ordered alias list; the first
//! present, non-null, non-blank value wins. Records that fail recency or
//! completeness checks are dropped silently.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

use crate::models::job::{Job, RawRecord};

pub const ID_KEYS: &[&str] = &["id", "jobId"];
pub const TITLE_KEYS: &[&str] = &["title", "position"];
pub const COMPANY_KEYS: &[&str] = &["companyName", "company"];
pub const LOCATION_KEYS: &[&str] = &["location", "jobLocation"];
pub const DESCRIPTION_KEYS: &[&str] = &["description", "descriptionText"];
pub const LINK_KEYS: &[&str] = &["url", "jobUrl", "link"];
pub const POSTED_AT_KEYS: &[&str] = &["listedAt", "postedAt", "timeAgo"];

/// The accepted posting age, anchored at `now`.
#[derive(Debug, Clone, Copy)]
pub struct RecencyWindow {
    pub now: DateTime<Utc>,
    pub posted_within_hours: u32,
}

impl RecencyWindow {
    pub fn new(now: DateTime<Utc>, posted_within_hours: u32) -> Self {
        Self {
            now,
            posted_within_hours,
        }
    }

    /// Oldest accepted posting time. The boundary itself is inside the window.
    /// `None` when the window reaches past the earliest representable time.
    pub fn cutoff(&self) -> Option<DateTime<Utc>> {
        self.now
            .checked_sub_signed(Duration::hours(i64::from(self.posted_within_hours)))
    }

    pub fn admits(&self, posted_at: DateTime<Utc>) -> bool {
        self.cutoff().map_or(true, |cutoff| posted_at >= cutoff)
    }
}

/// Returns the first alias holding a usable value.
///
/// Strings are trimmed and blank strings count as absent; numbers are
/// rendered as text so numeric ids survive.
pub fn resolve_field<'a>(record: &'a RawRecord, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| record.get(*key))
        .find(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            _ => true,
        })
}

fn resolve_text(record: &RawRecord, aliases: &[&str]) -> Option<String> {
    resolve_field(record, aliases).and_then(|value| match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Parses a posting timestamp. Unparseable input yields `None`, never an error.
///
/// Accepts RFC 3339, naive ISO-8601 datetimes and bare dates (both read as
/// UTC), and integer epoch milliseconds.
pub fn parse_posted_at(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(raw) => parse_timestamp_str(raw.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Normalizes one raw record into a `Job`, or `None` if it must be dropped.
pub fn normalize_record(record: &RawRecord, window: &RecencyWindow) -> Option<Job> {
    let posted_at = resolve_field(record, POSTED_AT_KEYS).and_then(parse_posted_at);
    if let Some(posted) = posted_at {
        if !window.admits(posted) {
            return None;
        }
    }

    let title = resolve_text(record, TITLE_KEYS)?;
    let company = resolve_text(record, COMPANY_KEYS)?;
    let description = resolve_text(record, DESCRIPTION_KEYS)?;
    let link = resolve_text(record, LINK_KEYS)?;

    let id = resolve_text(record, ID_KEYS).unwrap_or_else(|| link.clone());

    Some(Job {
        id,
        title,
        company,
        location: resolve_text(record, LOCATION_KEYS),
        description,
        posted_at,
        link,
        source_raw: record.clone(),
    })
}
