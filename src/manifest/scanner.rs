// src/manifest/scanner.rs
//! Walks `<root>/<ticker>/<runFolder>/[<portfolioFolder>/]` and builds run records.

use super::extract::{DecisionFields, ResultSource};
use super::options::{MissingResultPolicy, ScanOptions, SortOrder};
use super::record::{RunFolderName, RunRecord};
use super::stats::{is_calendar_date, ScanStats};
use super::tree::RunTree;
use crate::error::ManifestError;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

pub type GlobalManifest = Vec<RunRecord>;
pub type PerTickerManifests = BTreeMap<String, Vec<RunRecord>>;

/// Everything one scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub global: GlobalManifest,
    /// Only tickers with at least one record.
    pub per_ticker: PerTickerManifests,
    pub stats: ScanStats,
}

#[derive(Debug)]
struct TickerScan {
    ticker: String,
    records: Vec<RunRecord>,
    stats: ScanStats,
}

/// A result file that was found, decoded or not.
#[derive(Debug)]
struct LocationResult {
    fields: DecisionFields,
    source: ResultSource,
    malformed: Option<ManifestError>,
}

/// Scans `root` and returns the global and per-ticker manifests.
///
/// Only an unlistable root is fatal; every other problem is counted in
/// [`ScanStats`] and the affected folder is skipped or defaulted.
pub fn scan<T: RunTree + Sync>(
    tree: &T,
    root: &Path,
    options: &ScanOptions,
) -> Result<ScanReport, ManifestError> {
    let tickers: Vec<String> = sorted_child_dirs(tree, root)
        .map_err(|source| ManifestError::RootUnavailable {
            path: root.to_path_buf(),
            source,
        })?
        .into_iter()
        .filter(|name| !options.is_skipped_dir(name))
        .collect();

    info!("Found {} ticker directories in {}", tickers.len(), root.display());

    // Sub-scans touch disjoint subtrees; collect() keeps ticker order either way.
    let scans: Vec<TickerScan> = if options.parallel {
        tickers
            .par_iter()
            .map(|ticker| scan_ticker(tree, root, ticker, options))
            .collect()
    } else {
        tickers
            .iter()
            .map(|ticker| scan_ticker(tree, root, ticker, options))
            .collect()
    };

    let mut report = ScanReport::default();
    for ticker_scan in scans {
        info!("Scanning {}... {} workflows", ticker_scan.ticker, ticker_scan.records.len());
        report.stats.merge(&ticker_scan.stats);
        if ticker_scan.records.is_empty() {
            continue;
        }
        report.global.extend(ticker_scan.records.iter().cloned());
        report.per_ticker.insert(ticker_scan.ticker, ticker_scan.records);
    }

    sort_records(&mut report.global, options.order);
    for records in report.per_ticker.values_mut() {
        sort_records(records, options.order);
    }

    Ok(report)
}

/// Applies the ordering policy. Records arrive in traversal order.
pub fn sort_records(records: &mut [RunRecord], order: SortOrder) {
    match order {
        SortOrder::Traversal => {}
        // sort_by is stable, so equal dates keep traversal order
        SortOrder::DateDesc => records.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

fn sorted_child_dirs<T: RunTree>(tree: &T, dir: &Path) -> io::Result<Vec<String>> {
    let mut names = tree.child_dirs(dir)?;
    names.sort();
    Ok(names)
}

fn scan_ticker<T: RunTree>(tree: &T, root: &Path, ticker: &str, options: &ScanOptions) -> TickerScan {
    let ticker_dir = root.join(ticker);
    let mut stats = ScanStats {
        tickers_scanned: 1,
        ..ScanStats::default()
    };
    let mut records = Vec::new();

    let run_folders = match sorted_child_dirs(tree, &ticker_dir) {
        Ok(names) => names,
        Err(e) => {
            warn!("Cannot list ticker folder {}: {}", ticker_dir.display(), e);
            stats.unreadable_tickers += 1;
            return TickerScan {
                ticker: ticker.to_string(),
                records,
                stats,
            };
        }
    };

    for run_folder in run_folders {
        stats.run_folders_seen += 1;
        let name = match RunFolderName::parse(&run_folder) {
            Ok(name) => name,
            Err(e) => {
                debug!("Skipping {}/{}: {}", ticker, run_folder, e);
                stats.unparsable_run_folders += 1;
                continue;
            }
        };

        let run_dir = ticker_dir.join(&run_folder);
        for portfolio_folder in result_locations(tree, &run_dir, &options.portfolio_prefix) {
            let location = match &portfolio_folder {
                Some(portfolio) => run_dir.join(portfolio),
                None => run_dir.clone(),
            };

            let fields = match read_location(tree, &location) {
                Ok(result) => {
                    if let Some(e) = result.malformed {
                        debug!("{} (source {:?}), using defaults", e, result.source);
                        stats.malformed_results += 1;
                    }
                    result.fields
                }
                Err(e) => {
                    stats.missing_results += 1;
                    match options.missing_result {
                        MissingResultPolicy::Skip => {
                            debug!("Skipping location: {}", e);
                            continue;
                        }
                        MissingResultPolicy::Defaults => {
                            debug!("{}, using defaults", e);
                            DecisionFields::default()
                        }
                    }
                }
            };

            let record = build_record(ticker, &run_folder, portfolio_folder, &name, fields);
            if !is_calendar_date(&record.date) {
                debug!("{}/{} has irregular date '{}'", ticker, record.folder, record.date);
                stats.irregular_dates += 1;
            }
            records.push(record);
        }
    }

    TickerScan {
        ticker: ticker.to_string(),
        records,
        stats,
    }
}

/// Portfolio subfolders in name order, or the run folder itself (`None`).
fn result_locations<T: RunTree>(tree: &T, run_dir: &Path, prefix: &str) -> Vec<Option<String>> {
    let portfolios: Vec<Option<String>> = match sorted_child_dirs(tree, run_dir) {
        Ok(names) => names
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .map(Some)
            .collect(),
        Err(e) => {
            debug!("Cannot list run folder {}: {}", run_dir.display(), e);
            Vec::new()
        }
    };

    if portfolios.is_empty() {
        vec![None]
    } else {
        portfolios
    }
}

/// summary.json first, then risk_decision.json. A summary.json that exists is
/// never bypassed, even when it does not decode.
fn read_location<T: RunTree>(tree: &T, dir: &Path) -> Result<LocationResult, ManifestError> {
    for source in [ResultSource::Summary, ResultSource::RiskDecision] {
        let path = dir.join(source.file_name());
        let bytes = match tree.read_file(&path) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => continue,
            Err(e) => {
                return Ok(LocationResult {
                    fields: DecisionFields::default(),
                    source,
                    malformed: Some(ManifestError::ResultFileMalformed {
                        path,
                        reason: e.to_string(),
                    }),
                });
            }
        };

        let (fields, error) = DecisionFields::from_bytes(source, &bytes);
        return Ok(LocationResult {
            fields,
            source,
            malformed: error.map(|reason| ManifestError::ResultFileMalformed { path, reason }),
        });
    }

    Err(ManifestError::ResultFileMissing(dir.to_path_buf()))
}

fn build_record(
    ticker: &str,
    run_folder: &str,
    portfolio_folder: Option<String>,
    name: &RunFolderName,
    fields: DecisionFields,
) -> RunRecord {
    let date = if name.date.is_empty() {
        fields.date.unwrap_or_default()
    } else {
        name.date.clone()
    };

    RunRecord {
        ticker: ticker.to_string(),
        date,
        folder: RunRecord::relative_folder(run_folder, portfolio_folder.as_deref()),
        run_folder: run_folder.to_string(),
        portfolio_folder,
        sample: name.sample.or(fields.sample).unwrap_or(0),
        day: name.day.or(fields.day).unwrap_or(0),
        verdict: fields.verdict,
        confidence: fields.confidence,
        position: fields.position,
    }
}
