//! Link-Survey main entry point
//!
//! This is the command-line interface for the Link-Survey link reporter.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use link_survey::config::{load_config, validate, Config};
use link_survey::input::{ensure_input_exists, open_jobs};
use link_survey::output::{print_report, ConsoleSink, JsonLinesSink, ResultSink};
use link_survey::survey::{Coordinator, FetchConfig, Fetcher, JobProcessor};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Link-Survey: a batch link health and title reporter
///
/// Reads (name, URL) records from a CSV file, fetches every URL with a
/// pool of concurrent workers and reports the status, timing and page
/// title of each link.
#[derive(Parser, Debug)]
#[command(name = "link-survey")]
#[command(version)]
#[command(about = "A batch link health and title reporter", long_about = None)]
struct Cli {
    /// CSV file of name,URL records (overrides the config file)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of concurrent workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Do not create a sample input file when INPUT is missing
    #[arg(long)]
    no_create: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One block of `Key: value` lines per result
    Text,
    /// One JSON object per line
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    match handle_survey(config, cli.format).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Survey failed: {:#}", e);
            Err(e)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_survey=info,warn"),
            1 => EnvFilter::new("link_survey=debug,info"),
            2 => EnvFilter::new("link_survey=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file, if any, and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(input) = &cli.input {
        config.input.path = input.clone();
    }
    if let Some(workers) = cli.workers {
        config.survey.workers = workers;
    }
    if let Some(timeout) = cli.timeout {
        config.survey.request_timeout_secs = timeout;
    }
    if cli.no_create {
        config.input.create_if_missing = false;
    }

    validate(&config)?;
    Ok(config)
}

/// Reads the jobs, runs the survey and reports every result
async fn handle_survey(config: Config, format: Format) -> anyhow::Result<()> {
    let input = &config.input;

    if input.create_if_missing {
        ensure_input_exists(&input.path)
            .with_context(|| format!("failed to create {}", input.path.display()))?;
    }

    let jobs = open_jobs(&input.path, input.has_header)
        .with_context(|| format!("failed to read jobs from {}", input.path.display()))?;

    let fetcher = Fetcher::new(&FetchConfig::from_config(&config))
        .context("failed to build HTTP client")?;
    let coordinator = Coordinator::new(
        JobProcessor::new(fetcher),
        config.survey.workers,
        config.survey.queue_capacity,
    )?;

    tracing::info!(
        "Surveying {} links with {} workers ({}s timeout)",
        jobs.len(),
        coordinator.worker_count(),
        config.survey.request_timeout_secs
    );

    let mut sink: Box<dyn ResultSink> = match format {
        Format::Text => Box::new(ConsoleSink::stdout()),
        Format::Json => Box::new(JsonLinesSink::stdout()),
    };

    let report = coordinator.run(jobs, &mut sink).await?;

    if format == Format::Text {
        print_report(&report);
    }

    Ok(())
}
