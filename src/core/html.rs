// src/core/html.rs
//! Markup → what the parsers consume: visible text lines, labelled tables,
//! and team links from the index page. Thin wrappers over `scraper`.

use std::collections::BTreeSet;

use scraper::{ElementRef, Html};
use url::Url;

use crate::config::consts::DEPTH_CHART_LINK_TEXT;
use crate::core::sanitize::normalize_ws;
use crate::depth::{is_depth_table, UnitTable, UnitType};

const INVISIBLE: [&str; 4] = ["script", "style", "noscript", "template"];

/// Every text node split into lines, trimmed, empties dropped.
/// Script and style bodies are not visible text and are left out.
pub fn visible_lines(doc: &str) -> Vec<String> {
    let html = Html::parse_document(doc);
    let mut out = Vec::new();

    for node in html.root_element().descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let hidden = node
            .parent()
            .and_then(|p| p.value().as_element().map(|e| INVISIBLE.contains(&e.name())))
            .unwrap_or(false);
        if hidden {
            continue;
        }
        out.extend(text.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from));
    }
    out
}

pub fn page_title(doc: &str) -> Option<String> {
    let html = Html::parse_document(doc);
    html.select(selector!("title"))
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
}

/// Tables whose header row names `Pos` and `Player 1`, each labelled with the
/// unit named by the nearest heading before it (`None` if no heading names one).
pub fn depth_tables(doc: &str) -> Vec<UnitTable> {
    let html = Html::parse_document(doc);
    let mut unit: Option<UnitType> = None;
    let mut out = Vec::new();

    for el in html.select(selector!("h1, h2, h3, h4, h5, h6, table")) {
        if el.value().name() != "table" {
            if let Some(u) = UnitType::from_heading(&element_text(el)) {
                unit = Some(u);
            }
            continue;
        }

        let rows: Vec<Vec<String>> = el
            .select(selector!("tr"))
            .map(|tr| tr.select(selector!("th, td")).map(element_text).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();

        if rows.first().is_some_and(|h| is_depth_table(h)) {
            out.push(UnitTable { unit, rows });
        }
    }
    out
}

/// Absolute URLs of every `Depth Chart` link on the index page, sorted and unique.
pub fn depth_chart_links(doc: &str, base: &Url) -> Vec<Url> {
    let html = Html::parse_document(doc);
    let links: BTreeSet<Url> = html
        .select(selector!("a[href]"))
        .filter(|a| element_text(*a) == DEPTH_CHART_LINK_TEXT)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .collect();
    links.into_iter().collect()
}

fn element_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}
