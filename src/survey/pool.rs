//! Fixed-size worker pool
//!
//! Each worker claims one job at a time from the shared job queue, processes
//! it and pushes exactly one result. A worker stops once the job queue is
//! closed and empty.

use crate::job::{Failure, Job, JobResult, Outcome};
use crate::survey::processor::JobProcessor;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

/// Receiving end of the job queue, shared by every worker
type SharedJobs = Arc<Mutex<mpsc::Receiver<Job>>>;

/// Handles to the running workers
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `count` workers on the runtime
    ///
    /// # Arguments
    ///
    /// * `count` - Number of workers
    /// * `processor` - Cloned into every worker
    /// * `jobs` - Receiving end of the job queue
    /// * `results` - Sending end of the result queue
    pub fn spawn(
        count: usize,
        processor: JobProcessor,
        jobs: mpsc::Receiver<Job>,
        results: mpsc::UnboundedSender<JobResult>,
    ) -> Self {
        let jobs: SharedJobs = Arc::new(Mutex::new(jobs));

        let handles = (1..=count)
            .map(|index| {
                tokio::spawn(worker(
                    index,
                    processor.clone(),
                    Arc::clone(&jobs),
                    results.clone(),
                ))
            })
            .collect();

        Self { handles }
    }

    /// Number of workers spawned
    pub fn size(&self) -> usize {
        self.handles.len()
    }

    /// Waits for every worker to stop
    pub async fn join(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                tracing::error!("Worker task ended abnormally: {}", e);
            }
        }
    }

    /// Cancels every worker and waits until all of them are gone
    ///
    /// Jobs in flight are dropped without producing a result.
    pub async fn abort(self) {
        for handle in &self.handles {
            handle.abort();
        }

        for handle in self.handles {
            match handle.await {
                Err(e) if e.is_panic() => {
                    tracing::error!("Worker task ended abnormally: {}", e);
                }
                _ => {}
            }
        }
    }
}

async fn worker(
    index: usize,
    processor: JobProcessor,
    jobs: SharedJobs,
    results: mpsc::UnboundedSender<JobResult>,
) {
    tracing::trace!(worker = index, "Worker started");

    loop {
        // The lock is released as soon as a job is claimed
        let next = jobs.lock().await.recv().await;
        let Some(job) = next else {
            break;
        };

        tracing::debug!(worker = index, url = %job.target_url, "Worker claimed job");

        let outcome = processor.process_outcome(job).await;
        log_outcome(index, &outcome);

        if results.send(outcome.into_result()).is_err() {
            tracing::debug!(worker = index, "Result queue closed, stopping");
            break;
        }
    }

    tracing::trace!(worker = index, "Worker stopped: job queue drained");
}

fn log_outcome(index: usize, outcome: &Outcome) {
    let url = &outcome.result().job.target_url;

    match outcome {
        Outcome::Failed {
            reason: Failure::HttpStatus(status),
            ..
        } => {
            tracing::debug!(worker = index, url = %url, status = *status, "Non-200 response");
        }
        Outcome::Failed { reason, .. } => {
            tracing::warn!(worker = index, url = %url, "Job failed: {}", reason);
        }
        Outcome::SucceededWithDiagnostic { note, .. } => {
            tracing::warn!(worker = index, url = %url, "Response kept without title: {}", note);
        }
        Outcome::Succeeded(result) => {
            tracing::debug!(
                worker = index,
                url = %url,
                title = result.title.as_deref().unwrap_or_default(),
                "Job succeeded"
            );
        }
    }
}
