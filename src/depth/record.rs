// src/depth/record.rs
//! Record shape shared by both extraction strategies, plus the builder that
//! turns a raw `(jersey, name-slug)` pair into a finished row.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Column order of the delimited export. Matches the field order below.
pub const RECORD_HEADERS: [&str; 6] = ["team", "unit_type", "position", "depth", "jersey", "player"];

pub const UNKNOWN_TEAM: &str = "Unknown";

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
pub enum UnitType {
    Offense,
    Defense,
    #[serde(rename = "Special Teams")]
    #[strum(serialize = "Special Teams")]
    SpecialTeams,
    Unknown,
}

impl UnitType {
    /// Exact (case-insensitive) section-header match: `"offense"`, `"defense"`, `"special teams"`.
    pub fn from_section_header(line: &str) -> Option<Self> {
        if line.eq_ignore_ascii_case("offense") {
            Some(UnitType::Offense)
        } else if line.eq_ignore_ascii_case("defense") {
            Some(UnitType::Defense)
        } else if line.eq_ignore_ascii_case("special teams") {
            Some(UnitType::SpecialTeams)
        } else {
            None
        }
    }

    /// Looser match for page headings like "Army Offense" or "SPECIAL TEAMS DEPTH".
    pub fn from_heading(text: &str) -> Option<Self> {
        let lc = text.to_lowercase();
        if lc.contains("special teams") {
            Some(UnitType::SpecialTeams)
        } else if lc.contains("offense") {
            Some(UnitType::Offense)
        } else if lc.contains("defense") {
            Some(UnitType::Defense)
        } else {
            None
        }
    }
}

/// One depth-chart slot. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthChartRecord {
    pub team: String,
    pub unit_type: UnitType,
    pub position: String,
    pub depth: u32,
    pub jersey: String,
    pub player: String,
}

/// Build a record from parser context and the raw tokens.
/// The jersey token is kept verbatim (leading zeros survive); the name token is normalized.
pub fn build_record(
    team: &str,
    unit: UnitType,
    position: &str,
    depth: u32,
    jersey: &str,
    name_token: &str,
) -> DepthChartRecord {
    debug_assert!(!position.is_empty());
    DepthChartRecord {
        team: s!(team),
        unit_type: unit,
        position: s!(position),
        depth,
        jersey: s!(jersey),
        player: normalize_name(name_token),
    }
}

/// `"brady-anderson"` → `"Brady Anderson"`.
///
/// Hyphens and runs of whitespace become single spaces; each word is title-cased
/// (first letter of every alphabetic run upper, the rest lower), so `"o'neil"`
/// becomes `"O'Neil"` and an already clean `"John Doe"` is left as is.
pub fn normalize_name(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for word in token
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
    {
        if !out.is_empty() {
            out.push(' ');
        }
        title_case_into(word, &mut out);
    }
    out
}

fn title_case_into(word: &str, out: &mut String) {
    let mut prev_alpha = false;
    for ch in word.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_name_slugs() {
        assert_eq!(normalize_name("brady-anderson"), "Brady Anderson");
        assert_eq!(normalize_name("aj-smith"), "Aj Smith");
        assert_eq!(normalize_name("john-paul-jones"), "John Paul Jones");
    }

    #[test]
    fn normalize_name_cleans_spacing_and_case() {
        assert_eq!(normalize_name("John Doe"), "John Doe");
        assert_eq!(normalize_name("  JOHN--doe "), "John Doe");
        assert_eq!(normalize_name("o'neil-smith"), "O'Neil Smith");
        assert_eq!(normalize_name("tj-watt2"), "Tj Watt2");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn build_record_keeps_jersey_verbatim() {
        let r = build_record("Army", UnitType::Offense, "QB", 1, "07", "bryson-daily");
        assert_eq!(r.jersey, "07");
        assert_eq!(r.player, "Bryson Daily");
        assert_eq!(r.depth, 1);
        assert_eq!(r.team, "Army");
    }

    #[test]
    fn unit_type_display_matches_export_labels() {
        assert_eq!(UnitType::SpecialTeams.to_string(), "Special Teams");
        assert_eq!(UnitType::Offense.as_ref(), "Offense");
        assert_eq!("Special Teams".parse::<UnitType>().ok(), Some(UnitType::SpecialTeams));
    }

    #[test]
    fn section_header_is_exact_but_case_insensitive() {
        assert_eq!(UnitType::from_section_header("DEFENSE"), Some(UnitType::Defense));
        assert_eq!(UnitType::from_section_header("special TEAMS"), Some(UnitType::SpecialTeams));
        assert_eq!(UnitType::from_section_header("Offense Depth"), None);
        assert_eq!(UnitType::from_heading("Army Offense Depth"), Some(UnitType::Offense));
        assert_eq!(UnitType::from_heading("Special Teams Defense"), Some(UnitType::SpecialTeams));
    }
}
