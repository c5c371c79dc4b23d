// Copyright 2026 Prevalence Updater Contributors
// SPDX-License-Identifier: Apache-2.0

//! Refreshes `data/report-data.json` with the ADDM autism prevalence series
//! published on the CDC "Autism Data & Research" page.
//!
//! One run is one fetch, one extraction pass and one read/merge/write of the
//! report document. A failed fetch keeps the previous data.

pub mod acquisition;
pub mod config;
pub mod error;
pub mod report;
pub mod updater;

pub use config::UpdaterConfig;
pub use error::{UpdateError, UpdateResult};
pub use report::types::{PrevalenceEntry, ReportDocument, TrendPoint};
pub use updater::{DataUpdater, UpdateSummary};
