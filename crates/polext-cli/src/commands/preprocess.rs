//! Preprocess command - normalize raw policy text.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::info;

use polext_core::normalize::{normalize, preprocess};
use polext_core::text::read_text;

use super::{load_config, selected_samples};

/// Arguments for the preprocess command.
#[derive(Args)]
pub struct PreprocessArgs {
    /// Raw input file (default: every configured sample)
    input: Option<PathBuf>,

    /// Cleaned output file (default: stdout)
    #[arg(requires = "input")]
    output: Option<PathBuf>,

    /// Only preprocess the named sample document
    #[arg(long, conflicts_with = "input")]
    only: Option<String>,
}

pub fn run(args: PreprocessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.input {
        Some(input) => preprocess_single(input, args.output),
        None => preprocess_samples(config_path, args.only.as_deref()),
    }
}

fn preprocess_single(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(output) => {
            let doc = preprocess(&input, &output)
                .with_context(|| format!("failed to preprocess {}", input.display()))?;
            println!(
                "{} {} document, {} lines written to {}",
                style("✓").green(),
                doc.insurance_type,
                doc.lines.len(),
                output.display()
            );
        }
        None => {
            let raw = read_text(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            println!("{}", normalize(&raw).to_text());
        }
    }
    Ok(())
}

fn preprocess_samples(config_path: Option<&str>, only: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    for doc in selected_samples(&config, only)? {
        let paths = config.samples.paths(doc);
        let normalized = preprocess(&paths.raw, &paths.clean)
            .with_context(|| format!("failed to preprocess {}", paths.raw.display()))?;
        info!(
            "{}: {} -> {} ({})",
            doc.name,
            paths.raw.display(),
            paths.clean.display(),
            normalized.insurance_type
        );
    }

    println!("Full-document preprocessing complete.");
    Ok(())
}
