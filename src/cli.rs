// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{bail, WrapErr};

use crate::config::consts::{DEFAULT_TEAM_LIMIT, INDEX_URL, WORKERS};
use crate::config::options::{AppOptions, ExportFormat, ExportType, SourceSelector, Strategy};
use crate::progress::LogProgress;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Auto,
    Stream,
    Table,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

/// Scrape team depth charts into CSV/TSV.
///
/// Without --url or --file, team pages are discovered from the index page.
#[derive(Debug, Parser)]
#[command(name = "depth_scrape", version, about)]
pub struct Args {
    /// Team depth-chart page; repeatable. Rewritten to the printer-friendly view.
    #[arg(long = "url", value_name = "URL", conflicts_with = "files")]
    pub urls: Vec<String>,

    /// Saved page on disk (.html/.htm, or a one-token-per-line text dump); repeatable.
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Index page listing every team.
    #[arg(long, value_name = "URL", default_value = INDEX_URL)]
    pub index: String,

    /// Teams to take from the index; 0 means all.
    #[arg(long, default_value_t = DEFAULT_TEAM_LIMIT)]
    pub limit: usize,

    #[arg(long, value_enum, default_value = "auto")]
    pub strategy: StrategyArg,

    #[arg(long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// One file per team; -o names the directory.
    #[arg(long)]
    pub per_team: bool,

    /// Output file (or directory with --per-team).
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    #[arg(long)]
    pub no_headers: bool,

    /// Fail pages that give no records or break the ranking invariants.
    #[arg(long)]
    pub strict: bool,

    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,

    /// -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.sources = if !self.files.is_empty() {
            SourceSelector::Files(self.files.clone())
        } else if !self.urls.is_empty() {
            SourceSelector::Urls(self.urls.clone())
        } else {
            let limit = (self.limit > 0).then_some(self.limit);
            SourceSelector::Index { url: self.index.clone(), limit }
        };
        opts.scrape.strategy = match self.strategy {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::Stream => Strategy::Stream,
            StrategyArg::Table => Strategy::Table,
        };
        opts.scrape.strict = self.strict;
        opts.scrape.workers = self.workers.max(1);

        opts.export.format = match self.format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        };
        opts.export.export_type = if self.per_team { ExportType::PerTeam } else { ExportType::SingleFile };
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref()).wrap_err("logger setup")?;

    let opts = args.to_options();
    let mut progress = LogProgress::default();
    let pages = crate::scrape::collect(&opts.scrape, Some(&mut progress))?;

    if pages.is_empty() {
        bail!("no page could be scraped ({} failed)", progress.failed);
    }

    let records = crate::scrape::records(&pages);
    let written = crate::file::export_records(&opts.export, &records)?;

    for path in &written {
        println!("{}", path.display());
    }
    eprintln!(
        "{} records from {} page(s), {} failed",
        records.len(),
        pages.len(),
        progress.failed
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> AppOptions {
        let argv = std::iter::once("depth_scrape").chain(args.iter().copied());
        Args::try_parse_from(argv).unwrap().to_options()
    }

    #[test]
    fn defaults_scrape_the_index() {
        let o = parse(&[]);
        assert_eq!(o, AppOptions::default());
    }

    #[test]
    fn files_and_flags() {
        let o = parse(&["--file", "a.html", "--file", "b.txt", "--strategy", "table", "--strict", "--no-headers"]);
        assert_eq!(o.scrape.sources, SourceSelector::Files(vec![PathBuf::from("a.html"), PathBuf::from("b.txt")]));
        assert_eq!(o.scrape.strategy, Strategy::Table);
        assert!(o.scrape.strict);
        assert!(!o.export.include_headers);
    }

    #[test]
    fn per_team_tsv_into_directory() {
        let o = parse(&["--per-team", "--format", "tsv", "-o", "teams"]);
        assert_eq!(o.export.export_type, ExportType::PerTeam);
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert_eq!(o.export.out_path(), Path::new("teams"));
    }

    #[test]
    fn zero_limit_means_all() {
        let o = parse(&["--limit", "0"]);
        assert!(matches!(o.scrape.sources, SourceSelector::Index { limit: None, .. }));
    }

    #[test]
    fn urls_and_files_conflict() {
        let argv = ["depth_scrape", "--url", "https://x", "--file", "a.html"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
