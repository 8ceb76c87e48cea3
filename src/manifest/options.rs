// src/manifest/options.rs
//! Knobs for the scan and write passes.

use clap::ValueEnum;

pub const DEFAULT_PORTFOLIO_PREFIX: &str = "portfolio_";

/// Folder names under the root that never hold ticker data.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "__pycache__", "node_modules", "target", "dist"];

/// Ordering applied to the global and per-ticker lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// Ticker name, then run folder, then portfolio folder, all ascending.
    #[default]
    Traversal,
    /// Stable sort on `date` descending.
    DateDesc,
}

/// What a result location with neither result file contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MissingResultPolicy {
    #[default]
    Skip,
    /// Emit a record with default verdict/confidence/position.
    Defaults,
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub order: SortOrder,
    pub missing_result: MissingResultPolicy,
    pub portfolio_prefix: String,
    pub skip_dirs: Vec<String>,
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            order: SortOrder::default(),
            missing_result: MissingResultPolicy::default(),
            portfolio_prefix: DEFAULT_PORTFOLIO_PREFIX.to_string(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            parallel: false,
        }
    }
}

impl ScanOptions {
    /// Hidden entries and skip-list names are not ticker folders.
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.skip_dirs.iter().any(|s| s == name)
    }
}

#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub ticker_lists: bool,
    pub pretty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            ticker_lists: true,
            pretty: true,
        }
    }
}
