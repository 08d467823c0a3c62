//! Single-job processing
//!
//! Composes the fetcher and the classifier into one operation that turns a
//! [`Job`] into an [`Outcome`]. Nothing escapes as an error.
//!
//! | Condition | success | status | title |
//! |-----------|---------|--------|-------|
//! | blank name or URL | false | none | none |
//! | transport error | false | none | none |
//! | HTTP status != 200 | false | actual | suggested name |
//! | 200, not HTML | true | 200 | suggested name |
//! | 200, HTML | true | 200 | `<title>`, `<h1>`, then suggested name |
//! | 200, HTML body unreadable | true | 200 | suggested name |

use crate::job::{Failure, Job, JobResult, Outcome};
use crate::survey::classifier::classify;
use crate::survey::fetcher::Fetcher;
use reqwest::StatusCode;

/// Processes jobs one at a time; cheap to clone into every worker
#[derive(Debug, Clone)]
pub struct JobProcessor {
    fetcher: Fetcher,
}

impl JobProcessor {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// Processes a job and returns its result record
    pub async fn process(&self, job: Job) -> JobResult {
        self.process_outcome(job).await.into_result()
    }

    /// Processes a job and returns the tagged outcome
    pub async fn process_outcome(&self, job: Job) -> Outcome {
        if let Err(e) = job.validate() {
            return Outcome::Failed {
                result: JobResult::unanswered(job),
                reason: e.into(),
            };
        }

        let fetched = match self.fetcher.fetch(job.target_url.trim()).await {
            Ok(fetched) => fetched,
            Err(e) => {
                return Outcome::Failed {
                    result: JobResult::unanswered(job),
                    reason: e.into(),
                }
            }
        };

        let status = fetched.status.as_u16();
        let elapsed = fetched.elapsed;

        if fetched.status != StatusCode::OK {
            let title = job.suggested_name.clone();
            return Outcome::Failed {
                result: JobResult::answered(job, title, status, elapsed, false),
                reason: Failure::HttpStatus(status),
            };
        }

        match classify(fetched.response).await {
            Ok(classification) => {
                let title = classification.title_or(&job.suggested_name);
                Outcome::Succeeded(JobResult::answered(job, title, status, elapsed, true))
            }
            Err(e) => {
                let title = job.suggested_name.clone();
                Outcome::SucceededWithDiagnostic {
                    result: JobResult::answered(job, title, status, elapsed, true),
                    note: e.to_string(),
                }
            }
        }
    }
}
