// src/manifest/record.rs
//! Run records and run-folder name parsing.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const DEFAULT_VERDICT: &str = "HOLD";
pub const DEFAULT_CONFIDENCE: &str = "MEDIUM";

const SAMPLE_MARKER: &str = "sample";
const DAY_MARKER: &str = "day";

/// One simulation run as listed by the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub ticker: String,
    pub date: String,
    /// Path relative to the ticker folder, e.g. `2024-06-17_sample090_day268/portfolio_100000`.
    pub folder: String,
    pub run_folder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_folder: Option<String>,
    pub sample: u64,
    pub day: u64,
    pub verdict: String,
    pub confidence: String,
    /// Kept as written in the source file, integer or float.
    pub position: Number,
}

impl RunRecord {
    pub fn relative_folder(run_folder: &str, portfolio_folder: Option<&str>) -> String {
        match portfolio_folder {
            Some(portfolio) => format!("{}/{}", run_folder, portfolio),
            None => run_folder.to_string(),
        }
    }
}

/// Parsed `<date>_sample<N>_day<M>` folder name.
///
/// `sample`/`day` are `None` when the token lacks its marker; the scanner
/// then falls back to the summary contents and finally to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFolderName {
    pub date: String,
    pub sample: Option<u64>,
    pub day: Option<u64>,
}

impl RunFolderName {
    pub fn parse(name: &str) -> Result<Self, ManifestError> {
        let parts: Vec<&str> = name.split('_').collect();
        if parts.len() < 3 {
            return Err(ManifestError::UnparsableRunFolder(name.to_string()));
        }

        let sample = parse_marked(parts[1], SAMPLE_MARKER)
            .ok_or_else(|| ManifestError::UnparsableRunFolder(name.to_string()))?;
        let day = parse_marked(parts[2], DAY_MARKER)
            .ok_or_else(|| ManifestError::UnparsableRunFolder(name.to_string()))?;

        Ok(Self {
            date: parts[0].to_string(),
            sample,
            day,
        })
    }
}

/// `Some(None)` when the marker is absent, `None` when the digits are bad.
fn parse_marked(token: &str, marker: &str) -> Option<Option<u64>> {
    if !token.contains(marker) {
        return Some(None);
    }
    token.replace(marker, "").parse::<u64>().ok().map(Some)
}
