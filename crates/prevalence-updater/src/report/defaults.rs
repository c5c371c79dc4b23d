//! Built-in seed document used when no usable report data exists on disk.

use super::types::{PrevalenceEntry, ReportDocument, TrendPoint};
use serde_json::Map;

/// ADDM surveillance-year prevalence, 2000 through 2020.
const SEED_TREND: [(i32, f64); 11] = [
    (2000, 0.67),
    (2002, 0.67),
    (2004, 0.80),
    (2006, 0.91),
    (2008, 1.14),
    (2010, 1.47),
    (2012, 1.47),
    (2014, 1.69),
    (2016, 1.85),
    (2018, 2.27),
    (2020, 2.78),
];

/// The seed document. ADHD and Dyslexia are static placeholders.
pub fn default_document() -> ReportDocument {
    ReportDocument {
        last_updated: String::new(),
        prevalence: vec![
            PrevalenceEntry::new("ASD", 2.78, "ADDM ~1 in 36 (2020)"),
            PrevalenceEntry::new("ADHD", 9.8, "NSCH 2022 (ever diagnosed)"),
            PrevalenceEntry::new("Dyslexia", 7.5, "Midpoint of 5–10% range"),
        ],
        asd_trend: SEED_TREND
            .iter()
            .map(|&(year, percent)| TrendPoint { year, percent })
            .collect(),
        extra: Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::ASD_CONDITION;

    #[test]
    fn test_seed_trend_shape() {
        let doc = default_document();
        assert_eq!(doc.asd_trend.len(), 11);
        assert_eq!(doc.asd_trend.first().unwrap().year, 2000);
        assert_eq!(doc.asd_trend.last().unwrap().year, 2020);
        assert!(doc.asd_trend.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn test_seed_asd_entry_matches_latest_point() {
        let doc = default_document();
        let asd = doc.entry(ASD_CONDITION).unwrap();
        assert_eq!(asd.percent, doc.latest_trend_point().unwrap().percent);
        assert_eq!(doc.prevalence.len(), 3);
        assert!(doc.last_updated.is_empty());
    }
}
