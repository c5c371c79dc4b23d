//! ADDM trend extraction: pair surveillance years with "1 in N" ratios.
//!
//! The CDC page renders the combined prevalence table as text rows like
//! `2022 / 2014 / 16 / 32.2 (9.7-53.1) / 1 in 31`. Each recognised year token
//! is paired with the first ratio inside a bounded window after it, and the
//! scan resumes after that ratio so one row never feeds two years.

use super::page_text::visible_text;
use crate::report::types::TrendPoint;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// Surveillance years published by ADDM (every other year since 2000).
const YEAR_PATTERN: &str =
    r"\b(2000|2002|2004|2006|2008|2010|2012|2014|2016|2018|2020|2022)\b";

const RATIO_PATTERN: &str = r"(?i)\b1\s+in\s+(\d+)\b";

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(YEAR_PATTERN).expect("year regex is valid"))
}

fn ratio_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(RATIO_PATTERN).expect("ratio regex is valid"))
}

/// Extract the ASD trend from raw page markup.
pub fn extract_trend(html: &str, lookahead_chars: usize) -> Vec<TrendPoint> {
    extract_trend_from_text(&visible_text(html), lookahead_chars)
}

/// Extract the ASD trend from already-flattened page text.
///
/// Returns points sorted by year with one point per year. When a year shows
/// up with several ratios the larger percentage wins. An empty result means
/// nothing recognisable was on the page.
pub fn extract_trend_from_text(text: &str, lookahead_chars: usize) -> Vec<TrendPoint> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    let mut pos = 0;

    while let Some(year_match) = year_re().find_at(text, pos) {
        let window_end = window_end(text, year_match.end(), lookahead_chars);

        // Only the start of the ratio has to fall inside the window; its
        // digits are read from the full text so N is never truncated.
        let Some(caps) = ratio_re()
            .captures_at(text, year_match.end())
            .filter(|c| c.get(0).is_some_and(|m| m.start() < window_end))
        else {
            pos = year_match.end();
            continue;
        };
        // Group 0 always exists on a successful capture.
        let ratio = caps.get(0).expect("whole match");
        pos = ratio.end();

        let Ok(year) = year_match.as_str().parse::<i32>() else {
            continue;
        };
        let Some(percent) = caps[1].parse::<u32>().ok().and_then(ratio_to_percent) else {
            debug!("skipping unusable ratio {:?} for {year}", ratio.as_str());
            continue;
        };

        by_year
            .entry(year)
            .and_modify(|p| *p = p.max(percent))
            .or_insert(percent);
    }

    by_year
        .into_iter()
        .map(|(year, percent)| TrendPoint { year, percent })
        .collect()
}

/// Convert a "1 in N" denominator to a percentage rounded to 2 decimals.
pub fn ratio_to_percent(n: u32) -> Option<f64> {
    if n == 0 {
        return None;
    }
    Some(round2(100.0 / f64::from(n)))
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

/// Byte offset `chars` characters past `start`, clamped to the text length.
fn window_end(text: &str, start: usize, chars: usize) -> usize {
    text[start..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| start + i)
        .unwrap_or(text.len())
}
