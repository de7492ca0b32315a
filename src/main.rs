mod output;
mod source;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use hafl_logs::LoggerFilter;

use crate::source::LogSource;

/// Filter and convert Home Assistant log files to JSON
#[derive(Parser, Debug)]
#[command(name = "ha-filter-log")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Examples:
  # Filter logs by logger name
  ha-filter-log home-assistant.log --logger blueprint.test

  # Read from stdin
  cat home-assistant.log | ha-filter-log - --logger homeassistant.core

  # Get all logs as JSON
  ha-filter-log home-assistant.log")]
struct Args {
    /// Path to the log file (use "-" for stdin)
    #[arg(value_name = "LOG_FILE")]
    log_file: String,

    /// Filter by logger name (e.g. "blueprint.test")
    #[arg(short, long, value_name = "NAME")]
    logger: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout is reserved for JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let source = LogSource::from_arg(&args.log_file);
    let filter = LoggerFilter::from(args.logger);
    tracing::debug!(%source, logger = ?filter.name(), "reading log source");

    let records = source.read(&filter)?;
    tracing::debug!(records = records.len(), "filtered log records");

    output::write_records(io::stdout().lock(), &records, args.pretty)
        .context("Failed to write JSON output")?;

    Ok(())
}
