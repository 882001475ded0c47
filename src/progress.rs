// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page parsed.
    fn item_done(&mut self, _source: &str, _team: &str, _records: usize) {}

    /// One page failed; the run carries on.
    fn item_failed(&mut self, _source: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Counts pages, forwards everything to the `log` facade.
#[derive(Debug, Default)]
pub struct LogProgress {
    pub total: usize,
    pub done: usize,
    pub failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        log::info!("Scraping {total} page(s)");
    }

    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
    }

    fn item_done(&mut self, source: &str, team: &str, records: usize) {
        self.done += 1;
        log::info!("[{}/{}] {team}: {records} records ({source})", self.done + self.failed, self.total);
    }

    fn item_failed(&mut self, source: &str, error: &str) {
        self.failed += 1;
        log::error!("[{}/{}] {source}: {error}", self.done + self.failed, self.total);
    }

    fn finish(&mut self) {
        log::info!("Done: {} ok, {} failed", self.done, self.failed);
    }
}
