//! Log line classification and field extraction.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use thiserror::Error;

use crate::category::EventCategory;
use crate::event::Event;

/// Pre-compiled pattern for the leading timestamp: everything from the line
/// start through an `HH:MM:SS`-shaped token and a 4-digit year.
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+[\d:]{8} \d{4})").unwrap());

/// Pre-compiled pattern for the patient identifier token.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+-\w{1,3}-\w+\b").unwrap());

/// chrono format for the captured timestamp text, e.g. `Jan 5 08:00:00 2023`.
const TIMESTAMP_FORMAT: &str = "%b %d %H:%M:%S %Y";

/// Extraction failures for a line that matched a category label.
///
/// Each variant carries the offending line so the operator can locate it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("timestamp pattern matching failed - line: {line}")]
    TimestampPattern { line: String },

    #[error("unparseable timestamp {timestamp:?} - line: {line}")]
    TimestampValue { timestamp: String, line: String },

    #[error("identifier pattern matching failed - line: {line}")]
    IdentifierPattern { line: String },
}

/// Classifies a raw line against the candidate categories and extracts its
/// fields.
///
/// The first category whose label text is contained in the line wins.
/// Returns `Ok(None)` for lines matching no category (not an error), and
/// fails if a matched line is missing a well-formed timestamp or identifier.
pub fn extract(
    line: &str,
    categories: &[EventCategory],
) -> Result<Option<Event>, ExtractError> {
    let Some(category) = categories
        .iter()
        .copied()
        .find(|category| line.contains(category.label()))
    else {
        return Ok(None);
    };
    extract_as(line, category).map(Some)
}

/// Extracts the timestamp and identifier fields for a line already known to
/// belong to `category`.
pub fn extract_as(line: &str, category: EventCategory) -> Result<Event, ExtractError> {
    let timestamp_text = TIMESTAMP_RE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| ExtractError::TimestampPattern {
            line: line.to_string(),
        })?
        .as_str()
        .to_string();

    // Syslog-style day padding ("Jan  5") collapses to a single space.
    let normalized = timestamp_text.split_whitespace().collect::<Vec<_>>().join(" ");
    let timestamp = NaiveDateTime::parse_from_str(&normalized, TIMESTAMP_FORMAT)
        .map_err(|_| ExtractError::TimestampValue {
            timestamp: timestamp_text.clone(),
            line: line.to_string(),
        })?
        .and_utc();

    let identifier = IDENTIFIER_RE
        .find(line)
        .ok_or_else(|| ExtractError::IdentifierPattern {
            line: line.to_string(),
        })?
        .as_str()
        .to_string();

    Ok(Event {
        category,
        identifier,
        timestamp,
        timestamp_text,
        raw_line: line.to_string(),
    })
}
