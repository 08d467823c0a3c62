//! Link-Survey: a batch link health and title reporter
//!
//! This crate reads (name, URL) pairs, fetches every URL through a fixed-size
//! worker pool, classifies the responses and extracts a human-readable title
//! from HTML pages. Every submitted job yields exactly one result.

pub mod config;
pub mod input;
pub mod job;
pub mod output;
pub mod survey;

use thiserror::Error;

/// Main error type for Link-Survey operations
///
/// Per-job failures never surface here; they are carried by the job's
/// [`job::Outcome`]. Only batch-level problems become a `SurveyError`.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Job queue closed after {submitted} jobs were submitted")]
    QueueClosed { submitted: usize },

    #[error("Result queue closed early: expected {expected} results, received {received}")]
    MissingResults { expected: usize, received: usize },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Link-Survey operations
pub type Result<T> = std::result::Result<T, SurveyError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use job::{Job, JobError, JobResult, Outcome};
pub use output::{ResultSink, RunReport};
pub use survey::{run, Coordinator, Fetcher, JobProcessor};
