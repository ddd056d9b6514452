//! CLI for the patient-flow log auditor.

pub mod cli;
pub mod config;
pub mod discover;
pub mod sink;

pub use cli::Cli;
pub use config::Config;
