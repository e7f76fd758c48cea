use std::io::{self, Write};

use thiserror::Error;

use crate::actuator::{Actuator, ActuatorStatus};

// ---------------------------------------------------------------------------
// Scenario persistence: "<TAG> <status> <progress>" lines
// ---------------------------------------------------------------------------

/// Tags for the persisted actuator lines, e.g. `GEAR 2 0.5000`.
pub const GEAR_TAG: &str = "GEAR";
pub const DOOR_TAG: &str = "DOOR";
pub const NOSECONE_TAG: &str = "NOSECONE";

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed actuator state {payload:?}")]
    Malformed { payload: String },
}

/// Write one actuator line: tag, status discriminant, progress to four
/// decimal places.
pub fn write_actuator<W: Write + ?Sized>(
    w: &mut W,
    tag: &str,
    actuator: &Actuator,
) -> Result<(), ScenarioError> {
    writeln!(
        w,
        "{} {} {:.4}",
        tag,
        actuator.status().as_raw(),
        actuator.progress()
    )?;
    Ok(())
}

/// If `line` starts with `tag` (case-insensitive, as the host's scenario
/// reader matches tags), return the payload after it.
pub fn match_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let trimmed = line.trim_start();
    let head = trimmed.split_whitespace().next()?;
    if head.eq_ignore_ascii_case(tag) {
        Some(&trimmed[head.len()..])
    } else {
        None
    }
}

/// Parse the payload of a recognized actuator line back into the
/// persisted (status, progress) pair.
pub fn parse_actuator(payload: &str) -> Result<(ActuatorStatus, f64), ScenarioError> {
    let malformed = || ScenarioError::Malformed {
        payload: payload.to_string(),
    };

    let mut fields = payload.split_whitespace();
    let raw: u8 = fields
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(malformed)?;
    let progress: f64 = fields
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(malformed)?;
    let status = ActuatorStatus::from_raw(raw).ok_or_else(malformed)?;
    Ok((status, progress))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
