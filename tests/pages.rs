// tests/pages.rs
use std::fs;
use std::path::PathBuf;

use depth_scrape::config::options::{ScrapeOptions, SourceSelector, Strategy};
use depth_scrape::depth::UnitType;
use depth_scrape::progress::{LogProgress, Progress};
use depth_scrape::scrape::{self, PageSource};
use depth_scrape::ScrapeError;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("depth_scrape_pages_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn files(paths: Vec<PathBuf>) -> ScrapeOptions {
    ScrapeOptions { sources: SourceSelector::Files(paths), ..Default::default() }
}

#[test]
fn text_dump_goes_through_the_stream() {
    let page = scrape::scrape_page(&PageSource::File(fixture("army_pf.txt")), None, Strategy::Auto, true).unwrap();
    assert_eq!(page.team, "Army");
    assert_eq!(page.strategy, Strategy::Stream);
    assert_eq!(page.records.len(), 6);
    assert_eq!(page.records[3].player, "John Doe");
    assert_eq!(page.records[3].depth, 2);
}

#[test]
fn html_tables_are_the_fallback() {
    let page = scrape::scrape_page(&PageSource::File(fixture("navy_tables.html")), None, Strategy::Auto, false).unwrap();
    assert_eq!(page.strategy, Strategy::Table);
    assert_eq!(page.records.len(), 4);
    assert_eq!(page.records[2].unit_type, UnitType::Defense);
}

#[test]
fn strict_table_page_keeps_cells_as_printed() {
    let source = PageSource::File(fixture("navy_cells.html"));
    let page = scrape::scrape_page(&source, None, Strategy::Table, true).unwrap();

    assert_eq!(page.strategy, Strategy::Table);
    let got: Vec<_> = page.records.iter().map(|r| (r.position.as_str(), r.jersey.as_str())).collect();
    assert_eq!(got, vec![("QB", "10"), ("WR/X", "81"), ("RB", "")]);
    assert!(page.records.iter().all(|r| r.depth == 1 && r.team == "Navy"));
}

#[test]
fn strict_stream_page_still_checks_token_shapes() {
    let dir = tmp_dir("strict_stream");
    let dump = dir.join("army.txt");
    fs::write(&dump, "Army Depth Chart\nOffense\nQB\n2\nbryson-daily\n").unwrap();

    let page = scrape::scrape_page(&PageSource::File(dump), None, Strategy::Stream, true).unwrap();
    assert_eq!(page.records.len(), 1);
    assert!(scrape::scrape_page(&PageSource::File(fixture("navy_cells.html")), None, Strategy::Stream, true).is_err());
}

#[test]
fn collect_keeps_source_order_and_skips_failures() {
    let dir = tmp_dir("collect");
    let empty = dir.join("empty.txt");
    fs::write(&empty, "nothing to see\n").unwrap();

    let mut opts = files(vec![
        fixture("navy_tables.html"),
        empty.clone(),
        dir.join("missing.txt"),
        fixture("army_pf.txt"),
    ]);
    opts.strict = true;

    let mut progress = LogProgress::default();
    let pages = scrape::collect(&opts, Some(&mut progress as &mut dyn Progress)).unwrap();

    let teams: Vec<_> = pages.iter().map(|p| p.team.as_str()).collect();
    assert_eq!(teams, vec!["Navy", "Army"]);
    assert_eq!((progress.total, progress.done, progress.failed), (4, 2, 2));
    assert_eq!(scrape::records(&pages).len(), 10);
}

#[test]
fn lenient_mode_keeps_empty_pages() {
    let dir = tmp_dir("lenient");
    let empty = dir.join("empty.txt");
    fs::write(&empty, "Offense\nWR\nUpdated\n").unwrap();

    let pages = scrape::collect(&files(vec![empty]), None).unwrap();
    assert_eq!(pages.len(), 1);
    assert!(pages[0].records.is_empty());
    assert_eq!(pages[0].team, "Unknown");
}

#[test]
fn no_sources_is_an_error() {
    let err = scrape::collect(&files(vec![]), None).unwrap_err();
    assert!(matches!(err, ScrapeError::NoSources));
}
