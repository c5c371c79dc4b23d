//! Run configuration: where to fetch from, where the report data lives.

use crate::error::UpdateResult;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// CDC "Autism Data & Research" page carrying the ADDM prevalence table.
pub const CDC_ASD_URL: &str = "https://www.cdc.gov/autism/data-research/";

/// Report data file, relative to the working directory.
pub const DATA_JSON: &str = "data/report-data.json";

/// Network timeout for the single page fetch.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// How far past a year token the extractor looks for a `1 in N` ratio.
pub const LOOKAHEAD_CHARS: usize = 160;

/// Settings for one update run.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Page scraped for the ASD trend.
    pub source_url: Url,
    /// JSON document read and rewritten by the run.
    pub data_path: PathBuf,
    /// Bound on the whole HTTP request.
    pub timeout: Duration,
    /// Lookahead window, in characters, after each year token.
    pub lookahead_chars: usize,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            // Constant is a valid absolute URL.
            source_url: Url::parse(CDC_ASD_URL).expect("CDC URL is valid"),
            data_path: PathBuf::from(DATA_JSON),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            lookahead_chars: LOOKAHEAD_CHARS,
        }
    }
}

impl UpdaterConfig {
    /// Replace the source URL, validating it first.
    pub fn with_source_url(mut self, raw: &str) -> UpdateResult<Self> {
        self.source_url = Url::parse(raw)?;
        Ok(self)
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// A zero window would never match; it is clamped to one character.
    pub fn with_lookahead_chars(mut self, chars: usize) -> Self {
        self.lookahead_chars = chars.max(1);
        self
    }
}
