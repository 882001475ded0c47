// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod depth;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod scrape;

pub use error::{Result, ScrapeError};
