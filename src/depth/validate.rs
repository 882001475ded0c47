// src/depth/validate.rs
// Opt-in strictness for callers that want to reject suspicious output.

use thiserror::Error;

use super::classify::{is_jersey_token, is_position_token};
use super::record::DepthChartRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("record {index}: empty team")]
    EmptyTeam { index: usize },
    #[error("record {index}: bad position '{position}'")]
    BadPosition { index: usize, position: String },
    #[error("record {index}: jersey '{jersey}' is not all digits")]
    BadJersey { index: usize, jersey: String },
    #[error("record {index}: depth {depth} breaks the 1..N run of {position}")]
    DepthGap { index: usize, position: String, depth: u32 },
}

/// Check the output invariants of the stream parser.
///
/// Depth is checked per run of consecutive records sharing team, unit and
/// position: the run restarts at 1 whenever the key changes, and inside a run
/// each depth is either the next rank or 1 (a repeated position slot, e.g. a
/// second `WR` group).
pub fn validate(records: &[DepthChartRecord]) -> Result<(), InvariantViolation> {
    let mut prev: Option<&DepthChartRecord> = None;
    for (index, r) in records.iter().enumerate() {
        if r.team.trim().is_empty() {
            return Err(InvariantViolation::EmptyTeam { index });
        }
        if !is_position_token(&r.position) {
            return Err(InvariantViolation::BadPosition { index, position: r.position.clone() });
        }
        if !is_jersey_token(&r.jersey) {
            return Err(InvariantViolation::BadJersey { index, jersey: r.jersey.clone() });
        }

        let same_group = prev.is_some_and(|p| {
            p.team == r.team && p.unit_type == r.unit_type && p.position == r.position
        });
        let ok = match (same_group, prev) {
            (true, Some(p)) => r.depth == p.depth + 1 || r.depth == 1,
            _ => r.depth == 1,
        };
        if !ok {
            return Err(InvariantViolation::DepthGap {
                index,
                position: r.position.clone(),
                depth: r.depth,
            });
        }
        prev = Some(r);
    }
    Ok(())
}

/// Check what the table extractor promises: a team, a position cell, and
/// starters only. Position and jersey cells are kept as the table prints them
/// (`WR/X`, an empty jersey), so their shape is not checked.
pub fn validate_starters(records: &[DepthChartRecord]) -> Result<(), InvariantViolation> {
    for (index, r) in records.iter().enumerate() {
        if r.team.trim().is_empty() {
            return Err(InvariantViolation::EmptyTeam { index });
        }
        if r.position.trim().is_empty() {
            return Err(InvariantViolation::BadPosition { index, position: r.position.clone() });
        }
        if r.depth != 1 {
            return Err(InvariantViolation::DepthGap { index, position: r.position.clone(), depth: r.depth });
        }
    }
    Ok(())
}
