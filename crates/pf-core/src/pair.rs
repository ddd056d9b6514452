//! Matched admission/discharge pairs.

use chrono::{DateTime, Utc};

use crate::event::Event;

/// A matched (or half-matched) admission/discharge combination, the unit of
/// report output.
///
/// The variants make the at-least-one-side invariant structural: there is no
/// way to build a pair with both sides absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pair {
    /// A discharge matched to its most recent prior admission.
    Matched { admission: Event, discharge: Event },
    /// An admission with no later discharge (still open).
    AdmissionOnly(Event),
    /// A discharge with no prior admission.
    DischargeOnly(Event),
}

impl Pair {
    /// The admission side, if present.
    #[must_use]
    pub const fn admission(&self) -> Option<&Event> {
        match self {
            Self::Matched { admission, .. } | Self::AdmissionOnly(admission) => Some(admission),
            Self::DischargeOnly(_) => None,
        }
    }

    /// The discharge side, if present.
    #[must_use]
    pub const fn discharge(&self) -> Option<&Event> {
        match self {
            Self::Matched { discharge, .. } | Self::DischargeOnly(discharge) => Some(discharge),
            Self::AdmissionOnly(_) => None,
        }
    }

    /// The shared patient identifier, taken from whichever side is present.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Matched { admission, .. } | Self::AdmissionOnly(admission) => {
                &admission.identifier
            }
            Self::DischargeOnly(discharge) => &discharge.identifier,
        }
    }

    /// Chronological sort key: the admission timestamp if present, else the
    /// discharge timestamp.
    #[must_use]
    pub const fn sort_key(&self) -> DateTime<Utc> {
        match self {
            Self::Matched { admission, .. } | Self::AdmissionOnly(admission) => {
                admission.timestamp
            }
            Self::DischargeOnly(discharge) => discharge.timestamp,
        }
    }
}
