// src/error/mod.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// Run folder name does not match `<date>_sample<N>_day<M>`
    #[error("Unparsable run folder: {0}")]
    UnparsableRunFolder(String),

    /// Neither summary.json nor risk_decision.json at a result location
    #[error("No result file in {}", .0.display())]
    ResultFileMissing(PathBuf),

    /// Result file present but not valid JSON
    #[error("Malformed result file {}: {reason}", .path.display())]
    ResultFileMalformed { path: PathBuf, reason: String },

    /// Root directory missing or unreadable - CRITICAL
    #[error("Workflows root {} is unavailable: {source}", .path.display())]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path not writable - CRITICAL
    #[error("Failed to write {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding errors
    #[error("Serialization Error: {0}")]
    Serialization(String),

    /// Configuration errors
    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        ManifestError::Serialization(format!("JSON serialization error: {}", err))
    }
}

impl ManifestError {
    /// Categorizes error for logging and exit reporting
    pub fn categorize(&self) -> ErrorCategory {
        match self {
            ManifestError::UnparsableRunFolder(_) => ErrorCategory::Structure,
            ManifestError::ResultFileMissing(_) | ManifestError::ResultFileMalformed { .. } => {
                ErrorCategory::Data
            }
            ManifestError::RootUnavailable { .. } => ErrorCategory::Input,
            ManifestError::OutputWriteFailure { .. } | ManifestError::Serialization(_) => {
                ErrorCategory::Output
            }
            ManifestError::ConfigError(_) => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Structure,
    Data,
    Input,
    Output,
    Configuration,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Structure => "structure",
            ErrorCategory::Data => "data",
            ErrorCategory::Input => "input",
            ErrorCategory::Output => "output",
            ErrorCategory::Configuration => "configuration",
        };
        write!(f, "{}", name)
    }
}
