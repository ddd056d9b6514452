//! Classified log events.

use chrono::{DateTime, Utc};

use crate::category::EventCategory;

/// One classified, timestamped, identifier-tagged record extracted from a
/// log line.
///
/// Events are only built by the extractor ([`crate::extract`]), which fails
/// instead of producing a partially parsed record, and are never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The category whose label matched the line.
    pub category: EventCategory,
    /// The patient identifier token, e.g. `12-AB-xyz`.
    pub identifier: String,
    /// Parsed timestamp; the source format carries no zone, treated as UTC.
    pub timestamp: DateTime<Utc>,
    /// The raw timestamp substring, verbatim, for report output.
    pub timestamp_text: String,
    /// The full original line, verbatim, for report output and audit.
    pub raw_line: String,
}
