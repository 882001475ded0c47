// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::depth::InvariantViolation;

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Bad URL '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{page}: no depth-chart records found")]
    EmptyPage { page: String },

    #[error("{page}: {violation}")]
    Invariant { page: String, violation: InvariantViolation },

    #[error("No team pages to scrape")]
    NoSources,

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl ScrapeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io { path: path.into(), source }
    }
}
