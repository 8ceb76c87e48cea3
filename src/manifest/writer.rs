// src/manifest/writer.rs
//! Writes manifest.json and the per-ticker list.json files.

use super::options::WriteOptions;
use super::record::RunRecord;
use super::scanner::{GlobalManifest, PerTickerManifests};
use crate::error::ManifestError;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const TICKER_LIST_FILE: &str = "list.json";

/// Files produced by [`write`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub manifest_path: PathBuf,
    pub ticker_lists: Vec<PathBuf>,
}

/// Serializes a record list; pretty output uses two-space indentation.
pub fn to_json(records: &[RunRecord], pretty: bool) -> Result<String, ManifestError> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Writes `<output_root>/manifest.json` and, when enabled,
/// `<output_root>/<ticker>/list.json` for every non-empty ticker.
/// `output_root` is created when missing; existing files are overwritten.
pub fn write(
    global: &GlobalManifest,
    per_ticker: &PerTickerManifests,
    output_root: &Path,
    options: &WriteOptions,
) -> Result<WriteSummary, ManifestError> {
    fs::create_dir_all(output_root).map_err(|source| ManifestError::OutputWriteFailure {
        path: output_root.to_path_buf(),
        source,
    })?;

    let mut summary = WriteSummary {
        manifest_path: output_root.join(MANIFEST_FILE),
        ticker_lists: Vec::new(),
    };

    if options.ticker_lists {
        for (ticker, records) in per_ticker {
            if records.is_empty() {
                continue;
            }
            let ticker_dir = output_root.join(ticker);
            fs::create_dir_all(&ticker_dir).map_err(|source| ManifestError::OutputWriteFailure {
                path: ticker_dir.clone(),
                source,
            })?;
            let path = ticker_dir.join(TICKER_LIST_FILE);
            write_file(&path, &to_json(records, options.pretty)?)?;
            debug!("Wrote {} records to {}", records.len(), path.display());
            summary.ticker_lists.push(path);
        }
    }

    write_file(&summary.manifest_path, &to_json(global, options.pretty)?)?;
    info!(
        "Generated {} with {} total workflows",
        summary.manifest_path.display(),
        global.len()
    );
    if options.ticker_lists {
        info!("Generated {} for {} tickers", TICKER_LIST_FILE, summary.ticker_lists.len());
    }

    Ok(summary)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ManifestError> {
    fs::write(path, contents).map_err(|source| ManifestError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    })
}
