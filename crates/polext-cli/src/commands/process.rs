//! Process command - normalize and extract a raw policy document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::{debug, info};

use polext_core::normalize::normalize;
use polext_core::text::read_text;
use polext_core::{PolicyParser, RuleBasedParser};

use super::load_config;
use super::output::{format_result, print_warnings, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Raw policy text file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write the cleaned line sequence to this file
    #[arg(long)]
    clean: Option<PathBuf>,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing file: {}", args.input.display());

    let raw = read_text(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let doc = normalize(&raw);
    let cleaned = doc.to_text();

    if let Some(clean_path) = &args.clean {
        fs::write(clean_path, &cleaned)
            .with_context(|| format!("failed to write {}", clean_path.display()))?;
        debug!("Cleaned lines written to {}", clean_path.display());
    }

    let report = RuleBasedParser::new().parse(&cleaned);
    let output = format_result(&report.result, args.format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings {
        print_warnings(&report);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
