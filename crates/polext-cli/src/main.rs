//! CLI application for insurance policy text extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::{config, parse, preprocess, process};

/// Insurance policy extraction - Extract structured fields from policy text dumps
#[derive(Parser)]
#[command(name = "polext")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize raw policy text into cleaned lines
    Preprocess(preprocess::PreprocessArgs),

    /// Extract fields from cleaned policy text
    Parse(parse::ParseArgs),

    /// Normalize and extract a raw policy document in one step
    Process(process::ProcessArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Verbosity sets the default level; `RUST_LOG` directives refine it.
fn log_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Preprocess(args) => preprocess::run(args, cli.config.as_deref()),
        Commands::Parse(args) => parse::run(args, cli.config.as_deref()),
        Commands::Process(args) => process::run(args, cli.config.as_deref()),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
