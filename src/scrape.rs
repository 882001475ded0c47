// src/scrape.rs
//! Page orchestration: where pages come from, which extractor reads them,
//! and the worker pool that fetches many of them politely.
//!
//! ```text
//! CLI → scrape::collect → resolve_sources (index / urls / files)
//!                       ↘ workers: load → parse_page → ParsedPage
//!                         (failures reported to Progress, run continues)
//! ```

use std::{
    fmt, fs,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc,
    },
    thread,
    time::Duration,
};

use log::{debug, info, warn};
use url::Url;

use crate::{
    config::consts::{JITTER_MS, REQUEST_PAUSE_MS},
    config::options::{ScrapeOptions, SourceSelector, Strategy},
    core::{html, sanitize::dump_lines, urls, Fetcher},
    depth::{self, DepthChartRecord},
    error::{Result, ScrapeError},
    progress::Progress,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSource {
    Url(Url),
    File(PathBuf),
}

impl fmt::Display for PageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSource::Url(u) => write!(f, "{u}"),
            PageSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Page content as handed to the extractors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageInput {
    /// Raw HTML; both extractors can run on it.
    Markup(String),
    /// An already rendered one-token-per-line dump; stream extractor only.
    Lines(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedPage {
    pub source: String,
    pub team: String,
    /// The extractor that produced `records` (`Stream` or `Table`).
    pub strategy: Strategy,
    pub records: Vec<DepthChartRecord>,
}

/* ---------------- Single page ---------------- */

/// Run the selected extractor on one page. Never fails; an unreadable page
/// just yields no records.
pub fn parse_page(source: &str, input: &PageInput, strategy: Strategy) -> ParsedPage {
    let (lines, doc) = match input {
        PageInput::Markup(doc) => (html::visible_lines(doc), Some(doc.as_str())),
        PageInput::Lines(lines) => (lines.clone(), None),
    };
    let mut team = depth::discover_team_name(&lines);
    if team == depth::UNKNOWN_TEAM {
        if let Some(title) = doc.and_then(team_from_title) {
            team = title;
        }
    }
    let name = team.as_str();

    let stream = |team: &str| depth::parse_lines_with_team(team, &lines);
    let table = |team: &str| match doc {
        Some(doc) => depth::extract_tables(team, &html::depth_tables(doc)),
        None => Vec::new(),
    };

    let (used, records) = match strategy {
        Strategy::Stream => (Strategy::Stream, stream(name)),
        Strategy::Table => (Strategy::Table, table(name)),
        Strategy::Auto => {
            let records = stream(name);
            if records.is_empty() && doc.is_some() {
                debug!("{source}: token stream gave nothing, trying tables");
                (Strategy::Table, table(name))
            } else {
                (Strategy::Stream, records)
            }
        }
    };

    ParsedPage { source: s!(source), team, strategy: used, records }
}

/// `<title>` as a team name when no line names one. The generic
/// printer-friendly title says nothing about the team.
fn team_from_title(doc: &str) -> Option<String> {
    let title = html::page_title(doc)?;
    if title.contains(depth::machine::PRINTER_FRIENDLY_MARKER) {
        return None;
    }
    let name = title.replace(depth::machine::TEAM_TITLE_MARKER, "");
    let name = name.trim();
    (!name.is_empty()).then(|| s!(name))
}

/// Load, parse and (in strict mode) check one page.
pub fn scrape_page(
    source: &PageSource,
    fetcher: Option<&Fetcher>,
    strategy: Strategy,
    strict: bool,
) -> Result<ParsedPage> {
    let input = load(source, fetcher)?;
    let page = parse_page(&source.to_string(), &input, strategy);

    if strict {
        if page.records.is_empty() {
            return Err(ScrapeError::EmptyPage { page: page.source });
        }
        let checked = match page.strategy {
            Strategy::Table => depth::validate_starters(&page.records),
            _ => depth::validate(&page.records),
        };
        checked.map_err(|violation| ScrapeError::Invariant { page: page.source.clone(), violation })?;
    }
    Ok(page)
}

pub fn load(source: &PageSource, fetcher: Option<&Fetcher>) -> Result<PageInput> {
    match source {
        PageSource::Url(url) => {
            let fetcher = match fetcher {
                Some(f) => f.clone(),
                None => Fetcher::new()?,
            };
            fetcher.get(url.as_str()).map(PageInput::Markup)
        }
        PageSource::File(path) => {
            let text = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
            let is_markup = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"));
            Ok(if is_markup { PageInput::Markup(text) } else { PageInput::Lines(dump_lines(&text)) })
        }
    }
}

/* ---------------- Sources ---------------- */

/// Team depth-chart pages linked from the index, at most `limit` of them.
pub fn discover_team_urls(fetcher: &Fetcher, index_url: &str, limit: Option<usize>) -> Result<Vec<Url>> {
    let base = urls::parse(index_url)?;
    let doc = fetcher.get(base.as_str())?;
    let mut links = html::depth_chart_links(&doc, &base);
    info!("Found {} team depth chart pages on index", links.len());

    if let Some(n) = limit {
        links.truncate(n);
    }
    Ok(links)
}

pub fn resolve_sources(sel: &SourceSelector, fetcher: Option<&Fetcher>) -> Result<Vec<PageSource>> {
    let to_pf = |u: Url| {
        let pf = urls::printer_friendly_url(&u);
        debug!("{u} → {pf}");
        PageSource::Url(pf)
    };

    match sel {
        SourceSelector::Index { url, limit } => {
            let owned;
            let fetcher = match fetcher {
                Some(f) => f,
                None => {
                    owned = Fetcher::new()?;
                    &owned
                }
            };
            Ok(discover_team_urls(fetcher, url, *limit)?.into_iter().map(to_pf).collect())
        }
        SourceSelector::Urls(list) => list
            .iter()
            .map(|u| urls::parse(u).map(to_pf))
            .collect(),
        SourceSelector::Files(paths) => Ok(paths.iter().cloned().map(PageSource::File).collect()),
    }
}

/* ---------------- Many pages ---------------- */

/// Resolve sources and scrape them on a small worker pool.
/// Pages come back in source order; failed pages are reported and left out.
pub fn collect(opts: &ScrapeOptions, mut progress: Option<&mut dyn Progress>) -> Result<Vec<ParsedPage>> {
    let needs_network = !matches!(opts.sources, SourceSelector::Files(_));
    let fetcher = if needs_network { Some(Fetcher::new()?) } else { None };

    let sources = resolve_sources(&opts.sources, fetcher.as_ref())?;
    if sources.is_empty() {
        return Err(ScrapeError::NoSources);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }

    // Concurrency
    type PageResult = (usize, String, Result<ParsedPage>);

    let sources = Arc::new(sources);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<PageResult>();

    let workers = opts.workers.min(sources.len()).max(1);

    for _ in 0..workers {
        let sources = Arc::clone(&sources);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let fetcher = fetcher.clone();
        let (strategy, strict) = (opts.strategy, opts.strict);

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= sources.len() {
                    break;
                }
                let source = &sources[i];
                let result = scrape_page(source, fetcher.as_ref(), strategy, strict);
                if tx.send((i, source.to_string(), result)).is_err() {
                    break;
                }
                if matches!(source, PageSource::Url(_)) {
                    let jitter = (i as u64 * 97) % JITTER_MS.max(1);
                    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut pages: Vec<(usize, ParsedPage)> = Vec::with_capacity(sources.len());

    for _ in 0..sources.len() {
        match res_rx.recv() {
            Ok((i, _, Ok(page))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&page.source, &page.team, page.records.len());
                }
                pages.push((i, page));
            }
            Ok((_, source, Err(e))) => {
                warn!("{source}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&source, &e.to_string());
                }
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    pages.sort_by_key(|(i, _)| *i);
    Ok(pages.into_iter().map(|(_, page)| page).collect())
}

/// All records of all pages, in page order.
pub fn records(pages: &[ParsedPage]) -> Vec<DepthChartRecord> {
    pages.iter().flat_map(|p| p.records.iter().cloned()).collect()
}
