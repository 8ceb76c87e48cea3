// src/config/env.rs
use std::env;

pub const MANIFEST_ROOT: &str = "MANIFEST_ROOT";
pub const MANIFEST_OUTPUT_DIR: &str = "MANIFEST_OUTPUT_DIR";
pub const MANIFEST_ORDER: &str = "MANIFEST_ORDER";
pub const MANIFEST_TICKER_LISTS: &str = "MANIFEST_TICKER_LISTS";
pub const MANIFEST_MISSING_RESULT: &str = "MANIFEST_MISSING_RESULT";
pub const MANIFEST_PORTFOLIO_PREFIX: &str = "MANIFEST_PORTFOLIO_PREFIX";
pub const MANIFEST_SKIP_DIRS: &str = "MANIFEST_SKIP_DIRS";
pub const MANIFEST_PRETTY: &str = "MANIFEST_PRETTY";
pub const MANIFEST_PARALLEL: &str = "MANIFEST_PARALLEL";
pub const MANIFEST_LOG_LEVEL: &str = "MANIFEST_LOG_LEVEL";

/// Non-empty value of `key`, if set.
pub fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn bool_var(key: &str, default: bool) -> bool {
    var(key).map(|v| parse_bool(&v).unwrap_or(default)).unwrap_or(default)
}

/// Comma separated list, blanks dropped.
pub fn list_var(key: &str) -> Option<Vec<String>> {
    var(key).map(|s| split_list(&s))
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}
