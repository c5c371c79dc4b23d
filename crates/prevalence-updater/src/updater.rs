//! The update pipeline: fetch, extract, load, merge, stamp, save.

use crate::acquisition::http_client::HttpClient;
use crate::acquisition::trend::extract_trend;
use crate::config::UpdaterConfig;
use crate::error::UpdateResult;
use crate::report::merge::merge_trend;
use crate::report::store::ReportStore;
use chrono::{Local, NaiveDate};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Result of one run, printed as the CLI's summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSummary {
    pub data_path: PathBuf,
    /// Number of points in the written `asdTrend`.
    pub trend_points: usize,
    pub last_updated: String,
    /// Whether live data replaced the stored trend.
    pub trend_refreshed: bool,
}

impl fmt::Display for UpdateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Updated {} with {} ASD trend points; lastUpdated={}",
            self.data_path.display(),
            self.trend_points,
            self.last_updated
        )
    }
}

/// Runs a single fetch-parse-merge-write cycle.
pub struct DataUpdater {
    config: UpdaterConfig,
    client: HttpClient,
    store: ReportStore,
}

impl DataUpdater {
    pub fn new(config: UpdaterConfig) -> Self {
        let client = HttpClient::new(config.timeout);
        let store = ReportStore::new(config.data_path.clone());
        Self {
            config,
            client,
            store,
        }
    }

    /// Run the pipeline, dating the document with the local calendar date.
    pub async fn run(&self) -> UpdateResult<UpdateSummary> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Run the pipeline with an explicit "today".
    ///
    /// Fetch and parse problems never fail the run; only writing the
    /// document can.
    pub async fn run_on(&self, today: NaiveDate) -> UpdateResult<UpdateSummary> {
        let url = self.config.source_url.as_str();
        info!("fetching ASD trend from {url}");
        let markup = self.client.fetch_markup(url).await;

        let trend = extract_trend(&markup, self.config.lookahead_chars);
        if trend.is_empty() {
            info!("no ASD trend found, keeping existing data");
        } else {
            info!("extracted {} ASD trend points", trend.len());
        }

        let mut doc = self.store.load();
        let outcome = merge_trend(&mut doc, &trend, today);
        if let Some(latest) = outcome.asd_updated_to {
            info!(
                "ASD prevalence set to {}% ({})",
                latest.percent, latest.year
            );
        }

        self.store.save(&doc)?;

        Ok(UpdateSummary {
            data_path: self.store.path().to_path_buf(),
            trend_points: doc.asd_trend.len(),
            last_updated: doc.last_updated,
            trend_refreshed: outcome.trend_refreshed,
        })
    }
}
