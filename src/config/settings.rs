// src/config/settings.rs
use super::env::{self as menv, *};
use crate::error::ManifestError;
use crate::manifest::options::{
    MissingResultPolicy, ScanOptions, SortOrder, WriteOptions, DEFAULT_PORTFOLIO_PREFIX,
    DEFAULT_SKIP_DIRS,
};
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub root_dir: PathBuf,
    /// Where manifest.json and the ticker lists go; the root when unset.
    pub output_dir: Option<PathBuf>,
    pub order: SortOrder,
    pub ticker_lists: bool,
    pub missing_result: MissingResultPolicy,
    pub portfolio_prefix: String,
    pub skip_dirs: Vec<String>,
    pub pretty: bool,
    pub parallel: bool,
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root_dir: PathBuf::from("."),
            output_dir: None,
            order: SortOrder::default(),
            ticker_lists: true,
            missing_result: MissingResultPolicy::default(),
            portfolio_prefix: DEFAULT_PORTFOLIO_PREFIX.to_string(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            pretty: true,
            parallel: false,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl Config {
    /// Reads `MANIFEST_*` variables. A bad order, policy or log level is an
    /// error; a bad boolean falls back to its default.
    pub fn from_env() -> Result<Self, ManifestError> {
        let defaults = Config::default();
        Ok(Config {
            root_dir: menv::var(MANIFEST_ROOT)
                .map(PathBuf::from)
                .unwrap_or(defaults.root_dir),
            output_dir: menv::var(MANIFEST_OUTPUT_DIR).map(PathBuf::from),
            order: match menv::var(MANIFEST_ORDER) {
                Some(v) => parse_value_enum(MANIFEST_ORDER, &v)?,
                None => defaults.order,
            },
            ticker_lists: bool_var(MANIFEST_TICKER_LISTS, defaults.ticker_lists),
            missing_result: match menv::var(MANIFEST_MISSING_RESULT) {
                Some(v) => parse_value_enum(MANIFEST_MISSING_RESULT, &v)?,
                None => defaults.missing_result,
            },
            portfolio_prefix: menv::var(MANIFEST_PORTFOLIO_PREFIX)
                .unwrap_or(defaults.portfolio_prefix),
            skip_dirs: list_var(MANIFEST_SKIP_DIRS).unwrap_or(defaults.skip_dirs),
            pretty: bool_var(MANIFEST_PRETTY, defaults.pretty),
            parallel: bool_var(MANIFEST_PARALLEL, defaults.parallel),
            log_level: match menv::var(MANIFEST_LOG_LEVEL) {
                Some(v) => v.parse().map_err(|_| {
                    ManifestError::ConfigError(format!("{} has invalid level '{}'", MANIFEST_LOG_LEVEL, v))
                })?,
                None => defaults.log_level,
            },
        })
    }

    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.root_dir.as_os_str().is_empty() {
            return Err(ManifestError::ConfigError("root directory cannot be empty".to_string()));
        }
        if self.portfolio_prefix.is_empty() {
            return Err(ManifestError::ConfigError(
                "portfolio prefix cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_and_log(&self) -> Result<(), ManifestError> {
        self.validate()?;
        log::debug!("Manifest configuration loaded: {:?}", self);
        Ok(())
    }

    pub fn output_root(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| self.root_dir.clone())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            order: self.order,
            missing_result: self.missing_result,
            portfolio_prefix: self.portfolio_prefix.clone(),
            skip_dirs: self.skip_dirs.clone(),
            parallel: self.parallel,
        }
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            ticker_lists: self.ticker_lists,
            pretty: self.pretty,
        }
    }
}

fn parse_value_enum<T: ValueEnum>(key: &str, value: &str) -> Result<T, ManifestError> {
    T::from_str(value.trim(), true)
        .map_err(|e| ManifestError::ConfigError(format!("{} has invalid value: {}", key, e)))
}
