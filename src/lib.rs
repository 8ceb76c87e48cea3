// src/lib.rs
pub mod config;
pub mod error;
pub mod manifest; // Scan, extract, write
pub mod utils;

pub use error::{ErrorCategory, ManifestError};
pub use manifest::{
    scan, write, LocalTree, MemoryTree, RunRecord, RunTree, ScanOptions, ScanReport, WriteOptions,
};
