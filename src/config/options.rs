// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Where team pages come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSelector {
    /// Follow every "Depth Chart" link on the index page (up to `limit`).
    Index { url: String, limit: Option<usize> },
    /// Explicit team pages; depth-chart URLs are rewritten to printer-friendly ones.
    Urls(Vec<String>),
    /// Saved pages on disk: `.html`/`.htm` as markup, anything else as a line dump.
    Files(Vec<PathBuf>),
}

impl Default for SourceSelector {
    fn default() -> Self {
        SourceSelector::Index { url: s!(INDEX_URL), limit: Some(DEFAULT_TEAM_LIMIT) }
    }
}

/// Which extractor runs on a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Token stream first; tables only if the stream yields nothing.
    /// A table page under a heading that is exactly `Offense`/`Defense`/
    /// `Special Teams` gives the stream a section line, so its flattened
    /// cells are read as one long group and tables never run. Use `Table`
    /// for such pages.
    #[default]
    Auto,
    Stream,
    Table,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub sources: SourceSelector,
    pub strategy: Strategy,
    /// Treat empty pages and invariant violations as page failures.
    pub strict: bool,
    pub workers: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            sources: SourceSelector::default(),
            strategy: Strategy::Auto,
            strict: false,
            workers: WORKERS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerTeam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Single file: `<dir>/<stem>.<ext>` (or the user's own extension).
    /// Per team: the directory.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();

        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                let ext = match &self.out_path.user_ext {
                    Some(e) => e.to_string_lossy(),
                    None => self.format.ext().into(),
                };
                path.push(join!(stem, ".", &ext));
            }
            ExportType::PerTeam => { /* directory only */ }
        }
        path
    }

    /// Split user text into dir + stem. A typed extension is kept as-is;
    /// without one, the format decides.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
                self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
            }
            ExportType::PerTeam => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_single_file_follows_format() {
        let mut e = ExportOptions::default();
        assert_eq!(e.out_path(), PathBuf::from("out").join("depth_charts.csv"));
        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("out").join("depth_charts.tsv"));
    }

    #[test]
    fn user_extension_survives_format_change() {
        let mut e = ExportOptions::default();
        e.set_path("data/army.txt");
        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("data").join("army.txt"));
    }

    #[test]
    fn per_team_is_a_directory() {
        let mut e = ExportOptions { export_type: ExportType::PerTeam, ..Default::default() };
        e.set_path("teams");
        assert_eq!(e.out_path(), PathBuf::from("teams"));
    }

    #[test]
    fn default_sources_use_index() {
        let o = AppOptions::default();
        assert!(matches!(o.scrape.sources, SourceSelector::Index { limit: Some(10), .. }));
        assert_eq!(o.scrape.strategy, Strategy::Auto);
    }
}
