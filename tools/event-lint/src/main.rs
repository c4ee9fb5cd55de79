//! eventforge-lint - validate newline-delimited JSON event records.
//!
//! Reads one record per line from a file or stdin, prints `ok <id>` or
//! `rejected line <n>: <reason>` per record, and exits non-zero if any
//! record was rejected.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eventforge_lint::{lint, Report};
use eventforge_validation::{
    Pipeline, ValidationConfig, ENV_SOURCE_MAX_LEN, ENV_SOURCE_MIN_LEN,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "eventforge-lint", version)]
#[command(about = "Validate newline-delimited JSON event records")]
struct Cli {
    /// Input file (reads stdin if omitted)
    input: Option<PathBuf>,

    /// Minimum source length (default: EVENTFORGE_SOURCE_MIN_LEN or 5)
    #[arg(long)]
    min_source_len: Option<usize>,

    /// Maximum source length (default: EVENTFORGE_SOURCE_MAX_LEN or 100)
    #[arg(long)]
    max_source_len: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "EVENTFORGE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Print a JSON report instead of one line per record
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Flags win over the environment; the combined result is checked once.
    fn config(&self) -> Result<ValidationConfig> {
        ValidationConfig::from_lookup(|key| self.lookup(key))
            .context("invalid validation config")
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let flag = match key {
            ENV_SOURCE_MIN_LEN => self.min_source_len,
            ENV_SOURCE_MAX_LEN => self.max_source_len,
            _ => None,
        };
        flag.map(|value| value.to_string())
            .or_else(|| std::env::var(key).ok())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = cli.config()?;
    let pipeline = Pipeline::from_config(&config);
    info!(
        rules = ?pipeline.rule_names().collect::<Vec<_>>(),
        min_source_len = config.source.min_len,
        max_source_len = config.source.max_len,
        "Pipeline configured"
    );

    let report = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            lint(BufReader::new(file), &pipeline)?
        }
        None => lint(io::stdin().lock(), &pipeline)?,
    };

    print_report(&report, cli.json)?;
    info!(
        accepted = report.accepted,
        rejected = report.rejected,
        "Lint finished"
    );

    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for outcome in &report.outcomes {
            println!("{}", outcome);
        }
    }
    Ok(())
}
