// src/manifest/extract.rs
//! Field extraction from summary.json / risk_decision.json.
//!
//! Every field goes through [`extract_field`], so a missing key, a key of
//! the wrong type, or an unparseable file all end in the same default.

use super::record::{DEFAULT_CONFIDENCE, DEFAULT_VERDICT};
use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

pub const SUMMARY_FILE: &str = "summary.json";
pub const RISK_DECISION_FILE: &str = "risk_decision.json";

/// `object[key]` as `T`, or `default` when the object, the key, or the type is wrong.
pub fn extract_field<T: DeserializeOwned>(object: Option<&Value>, key: &str, default: T) -> T {
    object
        .and_then(|o| o.get(key))
        .and_then(|v| T::deserialize(v).ok())
        .unwrap_or(default)
}

/// Which file a result location was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Summary,
    RiskDecision,
}

impl ResultSource {
    pub fn file_name(self) -> &'static str {
        match self {
            ResultSource::Summary => SUMMARY_FILE,
            ResultSource::RiskDecision => RISK_DECISION_FILE,
        }
    }
}

/// The fields one result file contributes to a record.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionFields {
    pub verdict: String,
    pub confidence: String,
    pub position: Number,
    /// Run identity as recorded in summary.json, used when the folder name lacks it.
    pub date: Option<String>,
    pub sample: Option<u64>,
    pub day: Option<u64>,
}

impl Default for DecisionFields {
    fn default() -> Self {
        Self {
            verdict: DEFAULT_VERDICT.to_string(),
            confidence: DEFAULT_CONFIDENCE.to_string(),
            position: Number::from(0),
            date: None,
            sample: None,
            day: None,
        }
    }
}

impl DecisionFields {
    /// Pulls fields out of an already-decoded result file. `None` means the
    /// file did not decode and every field takes its default.
    pub fn from_value(source: ResultSource, raw: Option<&Value>) -> Self {
        match source {
            ResultSource::Summary => {
                let decision = raw.and_then(|r| r.get("decision"));
                Self {
                    verdict: extract_field(decision, "verdict", DEFAULT_VERDICT.to_string()),
                    confidence: extract_field(decision, "confidence", DEFAULT_CONFIDENCE.to_string()),
                    position: extract_field(decision, "position", Number::from(0)),
                    date: extract_field(raw, "date", None),
                    sample: extract_field(raw, "sample_number", None),
                    day: extract_field(raw, "actual_day_number", None),
                }
            }
            ResultSource::RiskDecision => Self {
                verdict: extract_field(raw, "verdict", DEFAULT_VERDICT.to_string()),
                confidence: extract_field(raw, "confidence", DEFAULT_CONFIDENCE.to_string()),
                position: extract_field(raw, "final_position_dollars", Number::from(0)),
                ..Self::default()
            },
        }
    }

    /// Decodes raw file bytes; the error string is kept for debug logging.
    pub fn from_bytes(source: ResultSource, bytes: &[u8]) -> (Self, Option<String>) {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => (Self::from_value(source, Some(&value)), None),
            Err(e) => (Self::from_value(source, None), Some(e.to_string())),
        }
    }
}
