//! Result sink trait and errors
//!
//! A sink receives results one at a time, in the order the coordinator
//! drains them. It formats or stores them and never filters on behalf
//! of the core.

use crate::job::JobResult;
use thiserror::Error;

/// Errors that can occur while writing results
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Consumer of job results
pub trait ResultSink {
    /// Accepts one drained result
    fn accept(&mut self, result: JobResult) -> OutputResult<()>;
}

/// Collects results in drain order
impl ResultSink for Vec<JobResult> {
    fn accept(&mut self, result: JobResult) -> OutputResult<()> {
        self.push(result);
        Ok(())
    }
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn accept(&mut self, result: JobResult) -> OutputResult<()> {
        (**self).accept(result)
    }
}
