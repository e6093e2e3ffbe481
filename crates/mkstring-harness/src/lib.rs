//! Demonstration harness for the mkstring formatter.
//!
//! This crate provides:
//! - Scenario replay: a fixed table of templates and argument mixes
//!   covering substitution, escapes, degradation, and long arguments
//! - Report generation: human-readable or machine-readable (JSON) output
//! - A timing loop over the hot-path template

#![forbid(unsafe_code)]

pub mod scenarios;

use thiserror::Error;

pub use scenarios::{ScenarioReport, run_all};

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization: {0}")]
    Report(#[from] serde_json::Error),
}
