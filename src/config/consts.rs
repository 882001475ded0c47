// src/config/consts.rs

// Net config
pub const INDEX_URL: &str = "https://www.ourlads.com/ncaa-football-depth-charts/";
pub const PF_PATH_PREFIX: &str = "/ncaa-football-depth-charts/pfdepthchart";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";
pub const TIMEOUT_SECS: u64 = 20;
pub const RETRIES: u32 = 3;
pub const RETRY_BACKOFF_MS: u64 = 500;

// Index discovery
pub const DEPTH_CHART_LINK_TEXT: &str = "Depth Chart";
pub const DEFAULT_TEAM_LIMIT: usize = 10;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const JITTER_MS: u64 = 250; // extra 0..250 ms

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "depth_charts";
