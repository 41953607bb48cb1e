mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::report::{Direction, write_report};

#[derive(Debug, Parser)]
#[command(
    name = "sc-dashboard",
    about = "Aggregate message counters from a worker statistics snapshot",
    version
)]
struct Cli {
    /// Snapshot JSON file (`{"workerStatistics": {...}}`).
    snapshot: PathBuf,

    /// Which message counters to aggregate.
    #[arg(long, value_enum, default_value_t = Direction::Both)]
    direction: Direction,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = std::fs::read(&cli.snapshot)
        .with_context(|| format!("failed to read {}", cli.snapshot.display()))?;
    let snapshot = sc_dashboard_core::parse_snapshot(&data)
        .with_context(|| format!("failed to parse {}", cli.snapshot.display()))?;
    info!(
        path = %cli.snapshot.display(),
        series = snapshot.worker_statistics.len(),
        "loaded snapshot"
    );

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &snapshot, cli.direction, cli.format)?;
    Ok(())
}
