// src/config/cli.rs
use super::settings::Config;
use crate::manifest::options::{MissingResultPolicy, SortOrder};
use crate::utils::verbosity_level;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Anything given here wins over the environment.
#[derive(Parser, Debug)]
#[command(name = "generate_manifest", version)]
#[command(about = "Aggregate workflow run summaries into manifest.json")]
pub struct Cli {
    /// Workflows root whose subfolders are tickers (default: MANIFEST_ROOT or .)
    pub root: Option<PathBuf>,

    /// Directory for manifest.json and ticker lists (default: the root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Manifest ordering
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Do not write <ticker>/list.json files
    #[arg(long)]
    pub no_ticker_lists: bool,

    /// What a result location without summary.json/risk_decision.json contributes
    #[arg(long, value_enum)]
    pub missing_result: Option<MissingResultPolicy>,

    /// Prefix marking nested result folders
    #[arg(long)]
    pub portfolio_prefix: Option<String>,

    /// Extra top-level folder names to ignore (repeatable)
    #[arg(long = "skip-dir")]
    pub skip_dirs: Vec<String>,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Scan tickers in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Layers the flags over `config`. `--skip-dir` extends the list
    /// instead of replacing it.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(root) = self.root {
            config.root_dir = root;
        }
        if let Some(output) = self.output {
            config.output_dir = Some(output);
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if self.no_ticker_lists {
            config.ticker_lists = false;
        }
        if let Some(policy) = self.missing_result {
            config.missing_result = policy;
        }
        if let Some(prefix) = self.portfolio_prefix {
            config.portfolio_prefix = prefix;
        }
        config.skip_dirs.extend(self.skip_dirs);
        if self.compact {
            config.pretty = false;
        }
        if self.parallel {
            config.parallel = true;
        }
        config.log_level = verbosity_level(config.log_level, self.verbose);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Stands in for values read from MANIFEST_* variables
    fn env_config() -> Config {
        Config {
            root_dir: PathBuf::from("/from/env"),
            output_dir: Some(PathBuf::from("/env/out")),
            order: SortOrder::Traversal,
            missing_result: MissingResultPolicy::Defaults,
            portfolio_prefix: "pf_".to_string(),
            skip_dirs: vec!["cache".to_string()],
            ..Config::default()
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "generate_manifest",
            "--skip-dir",
            "tmp",
            "--compact",
            "-v",
            "--order",
            "date-desc",
            "--missing-result",
            "skip",
            "--portfolio-prefix",
            "portfolio_",
            "--no-ticker-lists",
            "--parallel",
            "-o",
            "/cli/out",
            "/data",
        ]);
        let config = cli.apply(env_config());

        assert_eq!(config.root_dir, PathBuf::from("/data"));
        assert_eq!(config.output_root(), PathBuf::from("/cli/out"));
        assert_eq!(config.order, SortOrder::DateDesc);
        assert_eq!(config.missing_result, MissingResultPolicy::Skip);
        assert_eq!(config.portfolio_prefix, "portfolio_");
        assert_eq!(config.skip_dirs, vec!["cache", "tmp"]);
        assert!(!config.pretty);
        assert!(!config.ticker_lists);
        assert!(config.parallel);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = Cli::parse_from(["generate_manifest"]).apply(env_config());

        assert_eq!(config.root_dir, PathBuf::from("/from/env"));
        assert_eq!(config.output_dir, Some(PathBuf::from("/env/out")));
        assert_eq!(config.order, SortOrder::Traversal);
        assert_eq!(config.missing_result, MissingResultPolicy::Defaults);
        assert_eq!(config.portfolio_prefix, "pf_");
        assert_eq!(config.skip_dirs, vec!["cache"]);
        assert!(config.pretty);
        assert!(config.ticker_lists);
        assert!(!config.parallel);
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn test_repeated_verbose_and_skip_dirs() {
        let cli = Cli::parse_from(["generate_manifest", "-vv", "--skip-dir", "a", "--skip-dir", "b"]);
        let config = cli.apply(Config::default());

        assert_eq!(config.log_level, log::LevelFilter::Trace);
        assert!(config.skip_dirs.ends_with(&["a".to_string(), "b".to_string()]));
        assert!(config.skip_dirs.contains(&".git".to_string()));
    }

    #[test]
    fn test_rejects_unknown_order() {
        assert!(Cli::try_parse_from(["generate_manifest", "--order", "sideways"]).is_err());
    }
}
