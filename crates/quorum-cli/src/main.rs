//! CLI entry point for quorum.
//!
//! Argument parsing, file I/O, logging setup and exit codes live here. All
//! decision logic lives in `quorum-core`.

mod request;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quorum_core::{DecisionPolicy, Policy};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use request::EvaluationRequest;

/// Used when RUST_LOG is not set.
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "quorum",
    version,
    about = "Evaluate group decision policies against a weighted vote tally"
)]
struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. info, debug, quorum_core=trace).
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a proposal tally and print the verdict as JSON.
    Evaluate {
        /// Path to the evaluation request JSON ("-" reads stdin).
        #[arg(long, default_value = "-")]
        request: PathBuf,
    },

    /// Validate a decision policy JSON document.
    Validate {
        /// Path to the policy JSON ("-" reads stdin).
        #[arg(long)]
        policy: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    policy: &'static str,
    valid: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .and_then(|directives| parse_filter(EnvFilter::DEFAULT_ENV, &directives));
    let filter = from_env
        .or_else(|| parse_filter("--log-level", level))
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// No subscriber exists yet, so a bad filter is reported straight to stderr.
fn parse_filter(source: &str, directives: &str) -> Option<EnvFilter> {
    match EnvFilter::try_new(directives) {
        Ok(filter) => Some(filter),
        Err(e) => {
            eprintln!("warning: ignoring invalid {source} filter {directives:?}: {e}");
            None
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.cmd {
        Commands::Evaluate { request } => {
            let input = read_input(&request)?;
            let request = EvaluationRequest::from_json(&input)?;
            let report = request.evaluate()?;
            info!(policy = report.policy, verdict = ?report.verdict, "evaluated");
            print_json(&report)
        }
        Commands::Validate { policy } => {
            let input = read_input(&policy)?;
            let policy: Policy =
                serde_json::from_str(&input).context("failed to parse decision policy")?;
            policy
                .validate()
                .with_context(|| format!("invalid {} policy", policy.name()))?;
            print_json(&ValidationReport {
                policy: policy.name(),
                valid: true,
            })
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}
