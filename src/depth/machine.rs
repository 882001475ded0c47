// src/depth/machine.rs
//! Depth-chart state machine over the token stream.
//!
//! The printer-friendly page flattens to one token per line:
//!
//! ```text
//! Offense          <- section header
//! Pos No Player 1  <- column headers (skipped)
//! WR               <- position code, only because a jersey follows
//! 1
//! brady-anderson   <- depth 1
//! 12
//! john-doe         <- depth 2
//! LT ...
//! ```
//!
//! Every call to [`Steps::next`] consumes at least one line and reports what
//! it did as a [`Step`]. Nothing in here fails: unexpected lines are skipped
//! and the reason is reported, so a page always yields a best-effort result.

use log::debug;

use super::classify::LineClass;
use super::cursor::TokenCursor;
use super::record::{build_record, DepthChartRecord, UnitType, UNKNOWN_TEAM};

/// Marker of the heading line that carries the team name.
pub const TEAM_TITLE_MARKER: &str = "Depth Chart";
/// Generic site heading that also contains the title marker.
pub const PRINTER_FRIENDLY_MARKER: &str = "Printer-Friendly";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    SectionChange(UnitType),
    /// A position code confirmed by the jersey on the next line.
    PositionChange(String),
    Emitted(DepthChartRecord),
    Skipped(SkipReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Content before any section header.
    MissingContext,
    /// Column headers and "Updated" stamps.
    Metadata,
    /// Free text or a lone all-caps word outside of a ranked pair.
    StrayText,
    /// A jersey followed by a header instead of a name, or by nothing at all.
    MalformedGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseState {
    Seeking,
    InUnit,
    InPosition,
}

#[derive(Clone, Copy)]
enum State<'a> {
    Seeking,
    InUnit(UnitType),
    InPosition { unit: UnitType, position: &'a str, depth: u32 },
}

/// Iterator of parse steps for one page.
pub struct Steps<'a> {
    team: String,
    cursor: TokenCursor<'a>,
    state: State<'a>,
}

impl<'a> Steps<'a> {
    pub fn new<S: AsRef<str>>(team: &str, lines: &'a [S]) -> Self {
        Self { team: s!(team), cursor: TokenCursor::new(lines), state: State::Seeking }
    }

    pub fn state(&self) -> ParseState {
        match self.state {
            State::Seeking => ParseState::Seeking,
            State::InUnit(_) => ParseState::InUnit,
            State::InPosition { .. } => ParseState::InPosition,
        }
    }

    fn skip(&mut self, reason: SkipReason) -> Step {
        self.cursor.advance();
        Step::Skipped(reason)
    }

    /// Opens a group on the position line; the jersey after it stays unread
    /// and becomes the first ranked entry.
    fn enter_position(&mut self, unit: UnitType, position: &'a str) -> Step {
        self.state = State::InPosition { unit, position, depth: 1 };
        self.cursor.advance();
        Step::PositionChange(s!(position))
    }

    /// Jersey line under the cursor: read it and the name after it.
    fn ranked_entry(&mut self, unit: UnitType, position: &'a str, depth: u32, jersey: &'a str) -> Step {
        self.cursor.advance();
        let Ok(name) = self.cursor.current() else {
            self.state = State::InUnit(unit);
            return Step::Skipped(SkipReason::MalformedGroup);
        };
        self.cursor.advance();

        if name.class.is_structural() {
            debug!("{}: {unit} {position} ends on '{}' after jersey {jersey}", self.team, name.text);
            self.state = State::InUnit(unit);
            return Step::Skipped(SkipReason::MalformedGroup);
        }

        let record = build_record(&self.team, unit, position, depth, jersey, name.text);
        self.state = State::InPosition { unit, position, depth: depth + 1 };
        Step::Emitted(record)
    }
}

impl<'a> Iterator for Steps<'a> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        // Exhaustion is the only way out.
        let tok = self.cursor.current().ok()?;

        if let LineClass::Section(unit) = tok.class {
            self.cursor.advance();
            self.state = State::InUnit(unit);
            return Some(Step::SectionChange(unit));
        }

        let step = match self.state {
            State::Seeking => self.skip(SkipReason::MissingContext),

            State::InUnit(unit) => {
                if tok.class == LineClass::Metadata {
                    self.skip(SkipReason::Metadata)
                } else if self.cursor.at_position_entry() {
                    self.enter_position(unit, tok.text)
                } else {
                    self.skip(SkipReason::StrayText)
                }
            }

            State::InPosition { unit, position, depth } => {
                if self.cursor.at_position_entry() {
                    self.enter_position(unit, tok.text)
                } else {
                    match tok.class {
                        LineClass::Jersey => self.ranked_entry(unit, position, depth, tok.text),
                        LineClass::Metadata => self.skip(SkipReason::Metadata),
                        _ => self.skip(SkipReason::StrayText),
                    }
                }
            }
        };
        Some(step)
    }
}

/// Step-by-step parse with an already known team name.
pub fn steps<'a, S: AsRef<str>>(team: &str, lines: &'a [S]) -> Steps<'a> {
    Steps::new(team, lines)
}

/// Full-depth records for one page. The team name is taken from the page itself.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<DepthChartRecord> {
    let team = discover_team_name(lines);
    parse_lines_with_team(&team, lines)
}

pub fn parse_lines_with_team<S: AsRef<str>>(team: &str, lines: &[S]) -> Vec<DepthChartRecord> {
    let mut records = Vec::new();
    let mut malformed = 0usize;
    for step in steps(team, lines) {
        match step {
            Step::Emitted(r) => records.push(r),
            Step::Skipped(SkipReason::MalformedGroup) => malformed += 1,
            _ => {}
        }
    }
    debug!("{team}: {} records from {} lines ({malformed} malformed groups)", records.len(), lines.len());
    records
}

/// First line mentioning the title marker that is not the generic
/// printer-friendly heading. First match wins, even if it is a stray mention.
pub fn discover_team_name<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .find(|l| l.contains(TEAM_TITLE_MARKER) && !l.contains(PRINTER_FRIENDLY_MARKER))
        .map(|l| {
            l.replace(TEAM_TITLE_MARKER, "")
                .trim()
                .trim_matches('#')
                .trim()
                .to_string()
        })
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| s!(UNKNOWN_TEAM))
}
