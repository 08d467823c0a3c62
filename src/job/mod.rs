//! Job and result data model
//!
//! A [`Job`] is one (name, URL) pair to survey. Processing a job always
//! produces exactly one [`JobResult`]; the richer [`Outcome`] keeps the
//! reason a job failed or degraded visible in the type.

use crate::survey::FetchError;
use std::time::Duration;
use thiserror::Error;

/// One unit of work: a display name and the URL to fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Job {
    /// Caller-supplied display label
    pub suggested_name: String,

    /// URL to fetch
    pub target_url: String,
}

/// Reasons a job is rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("job has a blank suggested name")]
    BlankName,

    #[error("job has a blank target URL")]
    BlankUrl,
}

impl Job {
    pub fn new(suggested_name: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            suggested_name: suggested_name.into(),
            target_url: target_url.into(),
        }
    }

    /// Checks that both fields are non-blank after trimming whitespace
    pub fn validate(&self) -> Result<(), JobError> {
        if self.suggested_name.trim().is_empty() {
            return Err(JobError::BlankName);
        }

        if self.target_url.trim().is_empty() {
            return Err(JobError::BlankUrl);
        }

        Ok(())
    }
}

/// The outcome record for one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    /// Best-effort display title
    pub title: Option<String>,

    /// HTTP status, absent when no response was received
    pub status_code: Option<u16>,

    /// Time from sending the request to receiving the headers,
    /// absent when no request was attempted
    pub duration: Option<Duration>,

    /// The job that produced this result
    pub job: Job,

    pub success: bool,
}

impl JobResult {
    /// A result for a job that never received a response
    pub fn unanswered(job: Job) -> Self {
        Self {
            title: None,
            status_code: None,
            duration: None,
            job,
            success: false,
        }
    }

    /// A result for a job that received a response
    pub fn answered(
        job: Job,
        title: String,
        status_code: u16,
        duration: Duration,
        success: bool,
    ) -> Self {
        Self {
            title: Some(title),
            status_code: Some(status_code),
            duration: Some(duration),
            job,
            success,
        }
    }
}

/// Why a job ended with `success == false`
#[derive(Debug, Error)]
pub enum Failure {
    #[error("invalid job: {0}")]
    Invalid(#[from] JobError),

    #[error("request failed: {0}")]
    Transport(#[from] FetchError),

    #[error("HTTP {0}")]
    HttpStatus(u16),
}

/// Tagged outcome of processing one job
///
/// Every variant carries the [`JobResult`] to report. A response that could
/// not be parsed is still a success; only the note records what went wrong.
#[derive(Debug)]
pub enum Outcome {
    Failed { result: JobResult, reason: Failure },
    SucceededWithDiagnostic { result: JobResult, note: String },
    Succeeded(JobResult),
}

impl Outcome {
    pub fn result(&self) -> &JobResult {
        match self {
            Outcome::Failed { result, .. }
            | Outcome::SucceededWithDiagnostic { result, .. }
            | Outcome::Succeeded(result) => result,
        }
    }

    pub fn into_result(self) -> JobResult {
        match self {
            Outcome::Failed { result, .. }
            | Outcome::SucceededWithDiagnostic { result, .. }
            | Outcome::Succeeded(result) => result,
        }
    }
}
