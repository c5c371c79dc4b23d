//! Overlay a freshly scraped trend onto the persisted document.

use super::types::{ReportDocument, TrendPoint, ASD_CONDITION};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// What a merge changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeOutcome {
    /// Whether `asdTrend` was replaced.
    pub trend_refreshed: bool,
    /// Latest point written into the ASD entry, if one was updated.
    pub asd_updated_to: Option<TrendPoint>,
}

/// Merge `trend` into `doc` and stamp it with `today`.
///
/// An empty trend leaves the series and the ASD entry alone. Otherwise the
/// series is replaced wholesale and the first ASD entry follows its latest
/// point. `lastUpdated` is always set.
pub fn merge_trend(
    doc: &mut ReportDocument,
    trend: &[TrendPoint],
    today: NaiveDate,
) -> MergeOutcome {
    let mut outcome = MergeOutcome {
        trend_refreshed: false,
        asd_updated_to: None,
    };

    if !trend.is_empty() {
        doc.asd_trend = normalize_trend(trend);
        outcome.trend_refreshed = true;

        if let Some(latest) = doc.latest_trend_point().copied() {
            if let Some(entry) = doc.entry_mut(ASD_CONDITION) {
                entry.percent = latest.percent;
                entry.note = addm_note(&latest);
                outcome.asd_updated_to = Some(latest);
            }
        }
    }

    doc.last_updated = today.format("%Y-%m-%d").to_string();
    outcome
}

/// Sort by year and collapse duplicate years to their largest percentage.
pub fn normalize_trend(trend: &[TrendPoint]) -> Vec<TrendPoint> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for p in trend {
        by_year
            .entry(p.year)
            .and_modify(|v| *v = v.max(p.percent))
            .or_insert(p.percent);
    }
    by_year
        .into_iter()
        .map(|(year, percent)| TrendPoint { year, percent })
        .collect()
}

/// `ADDM 1 in N (year)`, with N recovered from the rounded percentage.
///
/// Halves round to even, so 0.32% reads as 1 in 312.
pub fn addm_note(point: &TrendPoint) -> String {
    let n = if point.percent > 0.0 {
        (100.0 / point.percent).round_ties_even()
    } else {
        0.0
    };
    format!("ADDM 1 in {n:.0} ({})", point.year)
}
