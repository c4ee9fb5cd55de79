//! Line-oriented linting of JSON event records.
//!
//! Each non-blank input line is parsed as an [`EventRecord`], turned into an
//! [`Event`] and run through a [`Pipeline`]. The first problem on a line is
//! reported; lines are independent of each other.

use std::io::BufRead;

use anyhow::{Context, Result};
use eventforge_events::{ConstructionError, Event, EventRecord};
use eventforge_validation::{Pipeline, ValidationError};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Why a line was rejected.
#[derive(Debug, Error)]
pub enum Rejection {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("construction failed: {0}")]
    Construction(#[from] ConstructionError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl Rejection {
    pub fn reason_code(&self) -> &'static str {
        match self {
            Rejection::Json(_) => "invalid_json",
            Rejection::Construction(err) => err.reason_code(),
            Rejection::Validation(err) => err.reason_code(),
        }
    }
}

/// Result for a single input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Accepted {
        line: usize,
        id: String,
    },
    Rejected {
        line: usize,
        reason_code: &'static str,
        reason: String,
    },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Accepted { id, .. } => write!(f, "ok {}", id),
            Outcome::Rejected { line, reason, .. } => {
                write!(f, "rejected line {}: {}", line, reason)
            }
        }
    }
}

/// Outcomes for a whole input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub accepted: usize,
    pub rejected: usize,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Returns true if no line was rejected.
    pub fn is_clean(&self) -> bool {
        self.rejected == 0
    }

    fn push(&mut self, outcome: Outcome) {
        if outcome.is_accepted() {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
        self.outcomes.push(outcome);
    }
}

/// Parses, constructs and validates a single record.
pub fn check_line(raw: &str, pipeline: &Pipeline) -> Result<Event, Rejection> {
    let record: EventRecord = serde_json::from_str(raw)?;
    let event = Event::try_from(record)?;
    pipeline.validate(&event)?;
    Ok(event)
}

/// Lints every non-blank line of `reader`.
///
/// Only I/O failures are returned as errors; bad records end up in the report.
pub fn lint<R: BufRead>(reader: R, pipeline: &Pipeline) -> Result<Report> {
    let mut report = Report::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let raw = line.with_context(|| format!("failed to read line {}", line_no))?;
        if raw.trim().is_empty() {
            continue;
        }

        let outcome = match check_line(&raw, pipeline) {
            Ok(event) => Outcome::Accepted {
                line: line_no,
                id: event.id().to_string(),
            },
            Err(rejection) => {
                debug!(
                    line = line_no,
                    reason_code = rejection.reason_code(),
                    "Record rejected"
                );
                Outcome::Rejected {
                    line: line_no,
                    reason_code: rejection.reason_code(),
                    reason: rejection.to_string(),
                }
            }
        };
        report.push(outcome);
    }

    Ok(report)
}
