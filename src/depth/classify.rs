// src/depth/classify.rs
//! Line classifier for the one-token-per-line page dump.

use super::record::UnitType;

/// Column-header literals the printer-friendly page repeats above each unit.
pub const HEADER_TOKENS: [&str; 8] = [
    "Pos", "No", "Player", "Player 1", "Player 2", "Player 3", "Player 4", "Player 5",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass {
    /// `Offense` / `Defense` / `Special Teams`
    Section(UnitType),
    /// Column headers and "Updated …" stamps. Never changes parser state.
    Metadata,
    Jersey,
    /// All-caps word. Only a real position if the next line is a jersey.
    PositionCode,
    FreeText,
}

impl LineClass {
    /// Lines that may never stand in for a player name.
    pub fn is_structural(self) -> bool {
        matches!(self, LineClass::Section(_) | LineClass::Metadata)
    }
}

/// Classify one trimmed line. Rules apply in priority order.
pub fn classify_line(line: &str) -> LineClass {
    if let Some(unit) = UnitType::from_section_header(line) {
        return LineClass::Section(unit);
    }
    if is_metadata(line) {
        return LineClass::Metadata;
    }
    if is_jersey_token(line) {
        return LineClass::Jersey;
    }
    if is_position_token(line) {
        return LineClass::PositionCode;
    }
    LineClass::FreeText
}

pub fn is_metadata(line: &str) -> bool {
    HEADER_TOKENS.contains(&line) || starts_with_ci(line, "updated")
}

/// Digits only (ASCII). `"07"` is a jersey, `""` is not.
pub fn is_jersey_token(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// `WR`, `LT`, `LDE`, `FS`, `PK` … but also any other all-caps word.
pub fn is_position_token(line: &str) -> bool {
    !line.is_empty()
        && !line.contains('-')
        && line.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
}

fn starts_with_ci(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
}
