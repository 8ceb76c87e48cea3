// src/manifest/stats.rs
use super::record::RunRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Counters collected while scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub tickers_scanned: usize,
    pub run_folders_seen: usize,
    pub unparsable_run_folders: usize,
    pub missing_results: usize,
    pub malformed_results: usize,
    pub irregular_dates: usize,
    pub unreadable_tickers: usize,
}

impl ScanStats {
    pub fn merge(&mut self, other: &ScanStats) {
        self.tickers_scanned += other.tickers_scanned;
        self.run_folders_seen += other.run_folders_seen;
        self.unparsable_run_folders += other.unparsable_run_folders;
        self.missing_results += other.missing_results;
        self.malformed_results += other.malformed_results;
        self.irregular_dates += other.irregular_dates;
        self.unreadable_tickers += other.unreadable_tickers;
    }
}

/// True for a real calendar date in `YYYY-MM-DD` form.
pub fn is_calendar_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Records per verdict, highest count first, ties by verdict name.
pub fn verdict_distribution(records: &[RunRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.verdict.as_str()).or_insert(0) += 1;
    }
    let mut distribution: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(verdict, count)| (verdict.to_string(), count))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn record(verdict: &str) -> RunRecord {
        RunRecord {
            ticker: "AAPL".into(),
            date: "2024-06-17".into(),
            folder: "f".into(),
            run_folder: "f".into(),
            portfolio_folder: None,
            sample: 0,
            day: 0,
            verdict: verdict.into(),
            confidence: "MEDIUM".into(),
            position: Number::from(0),
        }
    }

    #[test]
    fn test_verdict_distribution_order() {
        let records = vec![record("HOLD"), record("BUY"), record("SELL"), record("BUY"), record("SELL")];
        assert_eq!(
            verdict_distribution(&records),
            vec![("BUY".to_string(), 2), ("SELL".to_string(), 2), ("HOLD".to_string(), 1)]
        );
        assert!(verdict_distribution(&[]).is_empty());
    }

    #[test]
    fn test_is_calendar_date() {
        assert!(is_calendar_date("2024-02-29"));
        assert!(!is_calendar_date("2023-02-29"));
        assert!(!is_calendar_date("2024-6-1"));
        assert!(!is_calendar_date("latest"));
    }

    #[test]
    fn test_merge() {
        let mut a = ScanStats {
            tickers_scanned: 1,
            missing_results: 2,
            ..ScanStats::default()
        };
        a.merge(&ScanStats {
            tickers_scanned: 1,
            irregular_dates: 3,
            ..ScanStats::default()
        });
        assert_eq!(a.tickers_scanned, 2);
        assert_eq!(a.missing_results, 2);
        assert_eq!(a.irregular_dates, 3);
    }
}
