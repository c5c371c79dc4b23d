// Copyright 2026 Prevalence Updater Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use prevalence_updater::config::{CDC_ASD_URL, DATA_JSON, FETCH_TIMEOUT_SECS, LOOKAHEAD_CHARS};
use prevalence_updater::{DataUpdater, UpdaterConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "prevalence-updater",
    about = "Refresh report data with the latest CDC ADDM autism prevalence",
    version
)]
struct Cli {
    /// Report data file to read and rewrite
    #[arg(long, default_value = DATA_JSON)]
    data: PathBuf,

    /// Page to scrape for the ADDM trend table
    #[arg(long, default_value = CDC_ASD_URL)]
    url: String,

    /// Network timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Characters searched after a year for its "1 in N" ratio
    #[arg(long, default_value_t = LOOKAHEAD_CHARS)]
    window: usize,

    /// Enable verbose/debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Only log errors
    #[arg(long, short, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prevalence_updater={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = UpdaterConfig::default()
        .with_source_url(&cli.url)
        .with_context(|| format!("invalid --url {:?}", cli.url))?
        .with_data_path(&cli.data)
        .with_timeout(Duration::from_secs(cli.timeout_secs))
        .with_lookahead_chars(cli.window);

    let summary = DataUpdater::new(config)
        .run()
        .await
        .context("failed to update report data")?;

    println!("{summary}");
    Ok(())
}
