//! Parse command - extract fields from cleaned policy text.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::{debug, info};

use polext_core::{parse_file, write_result, PolextConfig};

use super::output::{format_result, print_warnings, OutputFormat};
use super::{load_config, selected_samples};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Cleaned input file (default: every configured sample)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, requires = "input")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Only parse the named sample document
    #[arg(long, conflicts_with = "input")]
    only: Option<String>,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let Some(input) = &args.input else {
        return parse_samples(&args, &config);
    };

    let report = parse_file(input).with_context(|| format!("failed to read {}", input.display()))?;
    debug!("Parsed {} in {}ms", input.display(), report.processing_time_ms);

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

    Ok(())
}

fn parse_samples(args: &ParseArgs, config: &PolextConfig) -> anyhow::Result<()> {
    for (i, doc) in selected_samples(config, args.only.as_deref())?.into_iter().enumerate() {
        let paths = config.samples.paths(doc);
        let report = parse_file(&paths.clean)
            .with_context(|| format!("failed to read {}", paths.clean.display()))?;

        if config.output.echo {
            if i > 0 {
                println!();
            }
            println!("{} {}", doc.name.to_uppercase(), args.format.label());
            println!("{}", format_result(&report.result, args.format, config.output.pretty)?);
        }

        write_result(&report.result, &paths.output, config.output.pretty)
            .with_context(|| format!("failed to write {}", paths.output.display()))?;
        info!("{}: wrote {}", doc.name, paths.output.display());

        if args.show_warnings {
            print_warnings(&report);
        }
    }

    Ok(())
}
