//! Subcommand implementations.

pub mod config;
pub mod output;
pub mod parse;
pub mod preprocess;
pub mod process;

use std::path::Path;

use polext_core::models::config::{PolextConfig, SampleDocument};

/// Load the explicit config file, or the default one if it exists.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PolextConfig> {
    let config = match config_path {
        Some(path) => PolextConfig::from_file(Path::new(path))?,
        None => PolextConfig::load_or_default(&config::default_config_path())?,
    };
    Ok(config)
}

/// Sample documents to run, optionally restricted to one name.
pub fn selected_samples<'a>(
    config: &'a PolextConfig,
    only: Option<&str>,
) -> anyhow::Result<Vec<&'a SampleDocument>> {
    match only {
        Some(name) => Ok(vec![config.samples.find(name)?]),
        None => Ok(config.samples.documents.iter().collect()),
    }
}
