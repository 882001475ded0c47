// src/core/urls.rs
// Team page URL shapes:
//   .../depth-chart.aspx?s=army&id=90038
//   .../depth-chart/army/90038
// Both map to the printer-friendly page
//   <origin>/ncaa-football-depth-charts/pfdepthchart/army/90038

use url::Url;

use crate::config::consts::PF_PATH_PREFIX;
use crate::error::{Result, ScrapeError};

pub fn parse(url: &str) -> Result<Url> {
    Url::parse(url.trim()).map_err(|source| ScrapeError::Url { url: s!(url), source })
}

/// `(slug, id)` of a team depth-chart URL, if it has one of the known shapes.
pub fn team_slug_and_id(url: &Url) -> Option<(String, String)> {
    if url.path().contains("depth-chart.aspx") {
        let mut slug = None;
        let mut id = None;
        for (k, v) in url.query_pairs() {
            match k.as_ref() {
                "s" if slug.is_none() => slug = Some(v.into_owned()),
                "id" if id.is_none() => id = Some(v.into_owned()),
                _ => {}
            }
        }
        if let (Some(s), Some(i)) = (slug, id) {
            if !s.is_empty() && !i.is_empty() {
                return Some((s, i));
            }
        }
    }

    let parts: Vec<&str> = url.path_segments()?.filter(|p| !p.is_empty()).collect();
    let at = parts.iter().position(|p| *p == "depth-chart")?;
    match (parts.get(at + 1), parts.get(at + 2)) {
        (Some(slug), Some(id)) => Some((s!(*slug), s!(*id))),
        _ => None,
    }
}

/// Printer-friendly page for a team URL. Unknown shapes fall back to a plain
/// `depth-chart` → `pfdepthchart` substitution; pages already printer-friendly
/// come back unchanged.
pub fn printer_friendly_url(url: &Url) -> Url {
    if let Some((slug, id)) = team_slug_and_id(url) {
        let path = format!("{PF_PATH_PREFIX}/{slug}/{id}");
        if let Ok(pf) = url.join(&path) {
            return pf;
        }
    }
    if url.as_str().contains("pfdepthchart") {
        return url.clone();
    }
    Url::parse(&url.as_str().replace("depth-chart", "pfdepthchart")).unwrap_or_else(|_| url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn aspx_query_shape() {
        let url = u("https://www.ourlads.com/ncaa-football-depth-charts/depth-chart.aspx?s=army&id=90038");
        assert_eq!(team_slug_and_id(&url), Some((s!("army"), s!("90038"))));
        assert_eq!(
            printer_friendly_url(&url).as_str(),
            "https://www.ourlads.com/ncaa-football-depth-charts/pfdepthchart/army/90038"
        );
    }

    #[test]
    fn path_shape() {
        let url = u("https://www.ourlads.com/ncaa-football-depth-charts/depth-chart/navy/90100");
        assert_eq!(team_slug_and_id(&url), Some((s!("navy"), s!("90100"))));
        assert_eq!(
            printer_friendly_url(&url).as_str(),
            "https://www.ourlads.com/ncaa-football-depth-charts/pfdepthchart/navy/90100"
        );
    }

    #[test]
    fn fallbacks() {
        let pf = u("https://www.ourlads.com/ncaa-football-depth-charts/pfdepthchart/army/90038");
        assert_eq!(team_slug_and_id(&pf), None);
        assert_eq!(printer_friendly_url(&pf), pf);

        let odd = u("https://example.com/depth-chart/army");
        assert_eq!(team_slug_and_id(&odd), None);
        assert_eq!(printer_friendly_url(&odd).as_str(), "https://example.com/pfdepthchart/army");

        let aspx_missing_id = u("https://example.com/depth-chart.aspx?s=army");
        assert_eq!(team_slug_and_id(&aspx_missing_id), None);
    }

    #[test]
    fn parse_reports_bad_urls() {
        assert!(matches!(parse("not a url"), Err(ScrapeError::Url { .. })));
        assert!(parse(" https://example.com/ ").is_ok());
    }
}
