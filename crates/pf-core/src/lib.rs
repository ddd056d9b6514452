//! Core domain logic for the patient-flow log auditor.
//!
//! This crate contains the fundamental types and logic for:
//! - Extraction: classifying raw log lines into typed events
//! - Loading: scanning log files into an event collection
//! - Pairing: matching each discharge to its prior admission
//! - Reporting: rendering resolved pairs into the audit report

pub mod category;
pub mod event;
pub mod extract;
pub mod loader;
pub mod pair;
pub mod pairing;
pub mod report;

pub use category::{EventCategory, UnknownCategory};
pub use event::Event;
pub use extract::{ExtractError, extract};
pub use loader::{LoadError, MalformedPolicy, load_events};
pub use pair::Pair;
pub use pairing::pair_events;
