// src/main.rs
//! Generates manifest.json and per-ticker list.json files for the pipeline
//! history page.
//!
//! ```bash
//! # Scan the current directory
//! generate_manifest
//!
//! # Scan another tree, newest runs first, no per-ticker lists
//! generate_manifest public/data/workflows --order date-desc --no-ticker-lists
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use workflow_manifest::{
    config::{self, Cli},
    manifest::{self, verdict_distribution, LocalTree},
    utils::{setup_logging, timing::Timer},
    ManifestError,
};

/// Wraps a fatal error with its category; anyhow prints the chain on exit.
fn fatal(err: ManifestError) -> anyhow::Error {
    let category = err.categorize();
    anyhow::Error::new(err).context(format!("Fatal {} error", category))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(config::load_config().context("Invalid manifest configuration")?);

    setup_logging(config.log_level).context("Failed to initialize logging")?;
    config.validate_and_log()?;

    let mut timer = Timer::start("manifest generation");
    let report = manifest::scan(&LocalTree, &config.root_dir, &config.scan_options())
        .map_err(fatal)
        .context("Scan failed")?;
    timer.checkpoint("scan");
    log::debug!("Scan stats: {:?}", report.stats);

    let output_root = config.output_root();
    manifest::write(&report.global, &report.per_ticker, &output_root, &config.write_options())
        .map_err(fatal)
        .with_context(|| format!("Failed to write manifest under {}", output_root.display()))?;
    timer.checkpoint("write");
    timer.finish();

    info!("Verdict Distribution:");
    for (verdict, count) in verdict_distribution(&report.global) {
        info!("  {}: {}", verdict, count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_names_category_once() {
        let err = fatal(ManifestError::ConfigError("bad order".into())).context("Scan failed");
        let rendered = format!("{:#}", err);
        assert_eq!(rendered, "Scan failed: Fatal configuration error: Config Error: bad order");
        assert_eq!(rendered.matches("bad order").count(), 1);
    }
}
