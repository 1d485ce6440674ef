//! `mapcolor`: color a map description read from a file or stdin.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mapcolor_harness::input::parse_instance;
use mapcolor_harness::output::write_output;
use mapcolor_harness::report::write_report_dir;
use mapcolor_harness::runner::{run, RunOptions};
use mapcolor_search::policy::Algorithm;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Color a map with four colors by backtracking search.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Map description (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Override the selector from the input header (a, b, c or d)
    #[arg(short, long, value_parser = parse_selector)]
    algorithm: Option<char>,

    /// Print coloring time and number of color attributions to stderr
    #[arg(short, long)]
    stats: bool,

    /// Check search invariants at every step and fail on any violation
    #[arg(long)]
    audit: bool,

    /// Write a canonical report directory
    #[arg(long, value_name = "DIR")]
    report: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_selector(raw: &str) -> Result<char, String> {
    match raw {
        "a" | "b" | "c" | "d" => Ok(raw.chars().next().unwrap_or('a')),
        _ => Err(format!("expected one of a, b, c, d (got {raw:?})")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG, when set, overrides the -v level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let instance = parse_instance(&text).context("Failed to parse map description")?;
    let algorithm = cli
        .algorithm
        .map_or(instance.algorithm, Algorithm::from_selector);
    info!(
        regions = instance.names.len(),
        edges = instance.graph.edge_count(),
        algorithm = %algorithm.selector(),
        "parsed map"
    );

    let report = run(&instance, algorithm, RunOptions { audit: cli.audit })
        .context("Coloring run failed")?;

    if cli.stats {
        eprintln!(
            "Coloring time: {} ms",
            report.elapsed.as_secs_f64() * 1000.0
        );
        eprintln!(
            "Number of color attributions: {}",
            report.result.stats.attempts
        );
    }

    let stdout = io::stdout();
    write_output(&mut stdout.lock(), &report.regions).context("Failed to write output")?;

    if let Some(dir) = &cli.report {
        let digest = write_report_dir(&report, dir)
            .with_context(|| format!("Failed to write report to {}", dir.display()))?;
        info!(%digest, dir = %dir.display(), "report written");
    }

    Ok(())
}
