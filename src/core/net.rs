// src/core/net.rs
// Blocking HTTP GET with timeout and a few retries.

use std::thread;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;

use crate::config::consts::{RETRIES, RETRY_BACKOFF_MS, TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Shared across worker threads; `Client` is internally reference counted.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    retries: u32,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|source| ScrapeError::Http { url: s!("<client>"), source })?;
        Ok(Self { client, retries: RETRIES.max(1) })
    }

    /// Body of `url` as text. Transport errors and 5xx are retried with a
    /// linear backoff; 4xx fails at once.
    pub fn get(&self, url: &str) -> Result<String> {
        let mut attempt = 1;
        loop {
            match self.get_once(url) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries && is_retryable(&e) => {
                    warn!("GET {url} attempt {attempt}/{} failed: {e}", self.retries);
                    thread::sleep(Duration::from_millis(RETRY_BACKOFF_MS * attempt as u64));
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn get_once(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| ScrapeError::Http { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|source| ScrapeError::Http { url: s!(url), source })
    }
}

fn is_retryable(e: &ScrapeError) -> bool {
    match e {
        ScrapeError::Http { .. } => true,
        ScrapeError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
        _ => false,
    }
}
