// src/manifest/mod.rs
pub mod extract;
pub mod options;
pub mod record;
pub mod scanner;
pub mod stats;
pub mod tree;
pub mod writer;

pub use extract::{extract_field, DecisionFields, ResultSource};
pub use options::{MissingResultPolicy, ScanOptions, SortOrder, WriteOptions};
pub use record::{RunFolderName, RunRecord};
pub use scanner::{scan, GlobalManifest, PerTickerManifests, ScanReport};
pub use stats::{verdict_distribution, ScanStats};
pub use tree::{LocalTree, MemoryTree, RunTree};
pub use writer::{write, WriteSummary};
