// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// A saved text dump → parser input: trimmed, non-empty lines.
pub fn dump_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

pub fn sanitize_team_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("team") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  Pos \n No\u{a0}Player 1 "), "Pos No Player 1");
    }

    #[test]
    fn dump_lines_trims_and_drops_blanks() {
        assert_eq!(dump_lines("Offense\r\n\r\n  WR \n1\n"), vec!["Offense", "WR", "1"]);
    }

    #[test]
    fn team_filenames() {
        assert_eq!(sanitize_team_filename("Texas A&M"), "Texas_AM");
        assert_eq!(sanitize_team_filename("Miami (OH)"), "Miami_OH");
        assert_eq!(sanitize_team_filename("  "), "team");
        assert_eq!(sanitize_team_filename("Ole-Miss"), "Ole-Miss");
    }
}
