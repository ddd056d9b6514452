//! Event category enum as the single source of truth for category labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The recognized log event categories.
///
/// Each category carries the literal label text that identifies it in a raw
/// log line. Pairing logic receives its admission/discharge roles as
/// parameters, so adding a category here does not touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Admission,
    Discharge,
}

impl EventCategory {
    /// All recognized categories, in classification order.
    pub const ALL: [Self; 2] = [Self::Admission, Self::Discharge];

    /// The literal label text as it appears in log lines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Admission => "new patient",
            Self::Discharge => "patient discharged",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for EventCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for EventCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown category labels.
#[derive(Debug, Clone)]
pub struct UnknownCategory(String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
