//! odsgen CLI - Build an .ods spreadsheet from a JSON or YAML description

use anyhow::Context;
use clap::Parser;
use odsgen::{DocumentBackend, OdsDocument, OdsGenerator, check_backend_version, load_content};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "odsgen")]
#[command(version)]
#[command(about = "Generate a styled OpenDocument spreadsheet from JSON or YAML", long_about = None)]
struct Cli {
    /// Input file (.json, or .yaml/.yml)
    input: PathBuf,

    /// Output .ods file
    output: PathBuf,

    /// Log filter, e.g. "warn" or "odsgen=debug" (overridden by RUST_LOG)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log filter '{}'", level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install the log subscriber: {}", e))?;
    // Fails only when the subscriber already bridged `log` records itself
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let document = OdsDocument::new();
    check_backend_version(&document)?;

    let content = load_content(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let generator = OdsGenerator::with_backend(&content, document)
        .with_context(|| format!("failed to build spreadsheet from {}", cli.input.display()))?;
    generator
        .backend()
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(
        tables = generator.backend().tables().len(),
        output = %cli.output.display(),
        "spreadsheet written"
    );
    Ok(())
}
