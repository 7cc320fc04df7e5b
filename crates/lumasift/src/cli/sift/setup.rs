//! Run setup: assemble and validate the config, prepare the processor.

use lumasift_core::{Config, ImageProcessor};
use std::path::{Path, PathBuf};

use super::SiftArgs;

/// Build the run configuration from CLI arguments and validate it.
pub fn build_config(args: &SiftArgs, verbose: bool, json_logs: bool) -> anyhow::Result<Config> {
    let mut config = Config::new(
        expand(&args.source),
        expand(&args.destination),
        args.threshold,
    );
    config.selection.invert = args.invert;
    config.discovery.follow_links = args.follow_links;
    config.copy.dry_run = args.dry_run;

    if verbose {
        config.logging.level = "debug".to_string();
    }
    if json_logs {
        config.logging.format = "json".to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Check the source, create the destination root, and build the processor.
pub fn setup_processor(config: &Config) -> anyhow::Result<ImageProcessor> {
    if !config.source.exists() {
        anyhow::bail!(
            "Source path does not exist: {:?}\n\n  Hint: Check the folder path and try again.",
            config.source
        );
    }

    if let Ok(json) = config.to_json() {
        tracing::debug!("Run configuration:\n{json}");
    }

    let processor = ImageProcessor::new(config);
    processor.prepare()?;
    tracing::info!(
        "Scanning {:?} (threshold {}, {})",
        config.source,
        config.selection.threshold,
        if config.selection.invert {
            "selecting darker"
        } else {
            "selecting brighter"
        }
    );
    Ok(processor)
}

/// Expand `~` in paths that are valid UTF-8; leave others untouched.
fn expand(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => Config::resolve_path(s),
        None => path.to_path_buf(),
    }
}
