//! Report document types, serialized as `data/report-data.json`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Condition label of the entry kept in sync with the ASD trend.
pub const ASD_CONDITION: &str = "ASD";

/// One observed ASD prevalence value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    /// Percentage, rounded to two decimals.
    pub percent: f64,
}

/// Point estimate for one tracked condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrevalenceEntry {
    pub condition: String,
    pub percent: f64,
    pub note: String,
    /// Keys this tool does not manage, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PrevalenceEntry {
    pub fn new(condition: &str, percent: f64, note: &str) -> Self {
        Self {
            condition: condition.to_string(),
            percent,
            note: note.to_string(),
            extra: Map::new(),
        }
    }
}

/// The persisted report data.
///
/// Field order here is the key order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    /// ISO 8601 date of the last run, empty if never run.
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub prevalence: Vec<PrevalenceEntry>,
    #[serde(default)]
    pub asd_trend: Vec<TrendPoint>,
    /// Top-level keys owned by other tools.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReportDocument {
    /// First entry labelled `condition`, if any.
    pub fn entry(&self, condition: &str) -> Option<&PrevalenceEntry> {
        self.prevalence.iter().find(|e| e.condition == condition)
    }

    pub fn entry_mut(&mut self, condition: &str) -> Option<&mut PrevalenceEntry> {
        self.prevalence.iter_mut().find(|e| e.condition == condition)
    }

    /// Most recent point of the ASD trend.
    pub fn latest_trend_point(&self) -> Option<&TrendPoint> {
        self.asd_trend.iter().max_by_key(|p| p.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_uses_camel_case_keys() {
        let doc = ReportDocument {
            last_updated: "2026-01-02".to_string(),
            prevalence: vec![PrevalenceEntry::new("ADHD", 9.8, "NSCH")],
            asd_trend: vec![TrendPoint {
                year: 2020,
                percent: 2.78,
            }],
            extra: Map::new(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "lastUpdated": "2026-01-02",
                "prevalence": [{"condition": "ADHD", "percent": 9.8, "note": "NSCH"}],
                "asdTrend": [{"year": 2020, "percent": 2.78}],
            })
        );
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let raw = json!({
            "lastUpdated": "",
            "prevalence": [
                {"condition": "ASD", "percent": 2.78, "note": "n", "source": "ADDM"}
            ],
            "asdTrend": [],
            "charts": {"theme": "dark"}
        });
        let doc: ReportDocument = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(doc.extra["charts"], json!({"theme": "dark"}));
        assert_eq!(doc.prevalence[0].extra["source"], json!("ADDM"));
        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let doc: ReportDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.last_updated.is_empty());
        assert!(doc.prevalence.is_empty());
        assert!(doc.asd_trend.is_empty());
        assert!(doc.latest_trend_point().is_none());
    }

    #[test]
    fn test_entry_lookup_returns_first_match() {
        let mut doc: ReportDocument = serde_json::from_value(json!({
            "prevalence": [
                {"condition": "ASD", "percent": 1.0, "note": "first"},
                {"condition": "ASD", "percent": 2.0, "note": "second"}
            ]
        }))
        .unwrap();
        assert_eq!(doc.entry(ASD_CONDITION).unwrap().note, "first");
        doc.entry_mut(ASD_CONDITION).unwrap().percent = 5.0;
        assert_eq!(doc.prevalence[0].percent, 5.0);
        assert_eq!(doc.prevalence[1].percent, 2.0);
        assert!(doc.entry("Dyslexia").is_none());
    }
}
