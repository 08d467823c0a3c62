//! Survey coordinator - job submission and result collection
//!
//! The coordinator owns both queues:
//! - Starts the worker pool before any job is submitted
//! - Submits jobs in input order, then closes the job queue
//! - Drains exactly one result per submitted job, in completion order
//! - Hands each drained result to the sink immediately

use crate::job::{Job, JobResult};
use crate::output::{ResultSink, RunReport};
use crate::survey::pool::WorkerPool;
use crate::survey::processor::JobProcessor;
use crate::{ConfigError, SurveyError};
use std::time::Instant;
use tokio::sync::mpsc;

/// Default job queue buffer
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Batch orchestration over a fixed-size worker pool
#[derive(Debug, Clone)]
pub struct Coordinator {
    processor: JobProcessor,
    worker_count: usize,
    queue_capacity: usize,
}

impl Coordinator {
    /// Creates a new coordinator
    ///
    /// # Arguments
    ///
    /// * `processor` - Shared by every worker
    /// * `worker_count` - Number of concurrent workers (at least 1)
    /// * `queue_capacity` - Job queue buffer (at least 1)
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(SurveyError)` - A size was zero
    pub fn new(
        processor: JobProcessor,
        worker_count: usize,
        queue_capacity: usize,
    ) -> Result<Self, SurveyError> {
        if worker_count == 0 {
            return Err(ConfigError::Validation("worker count must be >= 1".to_string()).into());
        }

        if queue_capacity == 0 {
            return Err(
                ConfigError::Validation("queue capacity must be >= 1".to_string()).into(),
            );
        }

        Ok(Self {
            processor,
            worker_count,
            queue_capacity,
        })
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Runs every job through the pool and streams results into `sink`
    ///
    /// The result queue is unbounded so workers never wait on the
    /// coordinator while it is still submitting.
    ///
    /// # Returns
    ///
    /// * `Ok(RunReport)` - One result per submitted job reached the sink
    /// * `Err(SurveyError)` - A queue closed early or the sink failed
    pub async fn run<I, S>(&self, jobs: I, sink: &mut S) -> Result<RunReport, SurveyError>
    where
        I: IntoIterator<Item = Job>,
        S: ResultSink + ?Sized,
    {
        let start_time = Instant::now();

        let (job_tx, job_rx) = mpsc::channel::<Job>(self.queue_capacity);
        let (result_tx, mut result_rx) = mpsc::unbounded_channel::<JobResult>();

        let pool = WorkerPool::spawn(
            self.worker_count,
            self.processor.clone(),
            job_rx,
            result_tx,
        );
        tracing::info!("Started {} workers", pool.size());

        let mut submitted = 0;
        for job in jobs {
            if job_tx.send(job).await.is_err() {
                pool.abort().await;
                return Err(SurveyError::QueueClosed { submitted });
            }
            submitted += 1;
        }

        // Closing the job queue lets idle workers stop once it is drained
        drop(job_tx);
        tracing::info!("Submitted {} jobs", submitted);

        let mut report = RunReport::new(submitted);
        while report.received() < submitted {
            let result = result_rx
                .recv()
                .await
                .ok_or_else(|| SurveyError::MissingResults {
                    expected: submitted,
                    received: report.received(),
                })?;

            report.record(&result);
            if let Err(e) = sink.accept(result) {
                // Workers must not outlive a failed run
                pool.abort().await;
                return Err(e.into());
            }
        }

        pool.join().await;
        report.elapsed = start_time.elapsed();

        tracing::info!(
            "Survey completed: {} succeeded, {} failed in {:?}",
            report.succeeded,
            report.failed,
            report.elapsed
        );

        Ok(report)
    }
}

/// Runs a complete survey with the default queue capacity
///
/// # Arguments
///
/// * `processor` - Processes each job
/// * `jobs` - Jobs in submission order
/// * `worker_count` - Number of concurrent workers
/// * `sink` - Receives each result as it is drained
///
/// # Example
///
/// ```no_run
/// use link_survey::survey::{run, FetchConfig, Fetcher, JobProcessor};
/// use link_survey::{Job, JobResult};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let processor = JobProcessor::new(Fetcher::new(&FetchConfig::default())?);
/// let jobs = vec![Job::new("Books", "https://books.toscrape.com/")];
/// let mut results: Vec<JobResult> = Vec::new();
///
/// let report = run(processor, jobs, 5, &mut results).await?;
/// assert_eq!(report.submitted, results.len());
/// # Ok(())
/// # }
/// ```
pub async fn run<I, S>(
    processor: JobProcessor,
    jobs: I,
    worker_count: usize,
    sink: &mut S,
) -> Result<RunReport, SurveyError>
where
    I: IntoIterator<Item = Job>,
    S: ResultSink + ?Sized,
{
    Coordinator::new(processor, worker_count, DEFAULT_QUEUE_CAPACITY)?
        .run(jobs, sink)
        .await
}
