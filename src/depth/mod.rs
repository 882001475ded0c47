// src/depth/mod.rs
//! # Depth-chart parsing core
//!
//! Pure, synchronous extraction of [`DepthChartRecord`]s from page content that
//! has already been fetched and rendered elsewhere (`core::net`, `core::html`).
//!
//! Two independent strategies share the record type and the name normalizer:
//!
//! - **stream** ([`parse_lines`]) – the printer-friendly page flattened to one
//!   token per line. A classifier tags each line, a cursor with one line of
//!   lookahead walks them, and a small state machine tracks unit and position
//!   and ranks players 1..N inside each position group.
//! - **table** ([`extract_table`]) – a table whose header row has `Pos` and
//!   `Player 1`. Starters only (depth 1).
//!
//! Which one runs for a page is the caller's decision (`config::options::Strategy`).
//!
//! Nothing here returns an error for bad input. Lines that do not fit the
//! grammar are skipped, and [`steps`] reports each skip with a [`SkipReason`]
//! so tests can see why. Callers wanting strictness run [`validate`] on stream
//! output or [`validate_starters`] on table output, and treat empty pages as
//! failures themselves.
//!
//! Each call is independent; parsing the same lines twice gives the same records.

pub mod classify;
pub mod cursor;
pub mod machine;
pub mod record;
pub mod table;
pub mod validate;

pub use classify::{classify_line, LineClass};
pub use cursor::{CursorError, Token, TokenCursor};
pub use machine::{
    discover_team_name, parse_lines, parse_lines_with_team, steps, ParseState, SkipReason, Step, Steps,
};
pub use record::{build_record, normalize_name, DepthChartRecord, UnitType, RECORD_HEADERS, UNKNOWN_TEAM};
pub use table::{extract_table, extract_tables, is_depth_table, UnitTable};
pub use validate::{validate, validate_starters, InvariantViolation};
