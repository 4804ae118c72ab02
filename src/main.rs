//! balance-check - print the balance table of a card dataset.
//!
//! Reads the JSON dataset, scores every card and prints one line per card.
//! Any failure prints a single `Error: ...` line and no table.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use card_balance::{dataset, BalanceConfig, ReportTable, Reporter};

#[derive(Parser, Debug)]
#[command(name = "balance-check", version, about = "Flag over- and under-costed cards")]
struct Cli {
    /// Path to the JSON card dataset
    #[arg(env = "BALANCE_DATA")]
    data: PathBuf,

    /// JSON file overriding weights, bonuses or thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip cards without id or cost instead of aborting
    #[arg(long)]
    lenient: bool,

    /// Score cards on all cores
    #[arg(long)]
    parallel: bool,

    /// Emit rows as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => BalanceConfig::from_path(path)?,
        None => BalanceConfig::default(),
    };
    if cli.lenient {
        config = config.lenient();
    }

    let cards = dataset::from_path(&cli.data)?;
    info!(path = %cli.data.display(), cards = cards.len(), "loaded dataset");

    let reporter = Reporter::new(config);
    let report = if cli.parallel {
        reporter.build_report_parallel(&cards)?
    } else {
        reporter.build_report(&cards)?
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("encoding report")?;
        println!("{json}");
    } else {
        print!("{}", ReportTable::new(&report.rows));
    }
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays the table; skipped cards show at WARN
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
