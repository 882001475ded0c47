// src/depth/table.rs
//! Starter-only extraction from tabular depth charts.
//!
//! Some pages render each unit as a table:
//!
//! ```text
//! Pos | No | Player 1        | No | Player 2 | ...
//! WR  | 12 | John Doe        | 81 | ...
//! ```
//!
//! Only the first player column is read, so every record has depth 1.
//! The unit label comes from the caller (see `core::html::depth_tables`).

use super::record::{build_record, DepthChartRecord, UnitType};

/// One table as rows of cell text, labelled with the unit it belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitTable {
    pub unit: Option<UnitType>,
    pub rows: Vec<Vec<String>>,
}

impl UnitTable {
    pub fn unit_or_unknown(&self) -> UnitType {
        self.unit.unwrap_or(UnitType::Unknown)
    }
}

/// Header row must mention both "pos" and "player 1".
pub fn is_depth_table<S: AsRef<str>>(header: &[S]) -> bool {
    let joined = header
        .iter()
        .map(|c| c.as_ref().trim())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    joined.contains("pos") && joined.contains("player 1")
}

pub fn extract_table<S: AsRef<str>>(team: &str, unit: UnitType, rows: &[Vec<S>]) -> Vec<DepthChartRecord> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    if !is_depth_table(header) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for row in data {
        let Some(position) = row.first().map(|c| c.as_ref().trim()) else { continue };
        if position.is_empty() || position.eq_ignore_ascii_case("pos") {
            continue;
        }
        if row.len() < 3 {
            continue;
        }
        let jersey = row[1].as_ref().trim();
        let player = row[2].as_ref().trim();
        if jersey.is_empty() && player.is_empty() {
            continue;
        }
        out.push(build_record(team, unit, position, 1, jersey, player));
    }
    out
}

/// Every table on a page, in page order.
pub fn extract_tables(team: &str, tables: &[UnitTable]) -> Vec<DepthChartRecord> {
    tables
        .iter()
        .flat_map(|t| extract_table(team, t.unit_or_unknown(), &t.rows))
        .collect()
}
