//! Run statistics
//!
//! Counts gathered by the coordinator while it drains results.

use crate::job::JobResult;
use std::time::Duration;

/// Summary of one completed survey run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of jobs put on the job queue
    pub submitted: usize,

    /// Results with `success == true`
    pub succeeded: usize,

    /// Results with `success == false`
    pub failed: usize,

    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

impl RunReport {
    /// Creates an empty report for a run of `submitted` jobs
    pub fn new(submitted: usize) -> Self {
        Self {
            submitted,
            ..Self::default()
        }
    }

    /// Counts one drained result
    pub fn record(&mut self, result: &JobResult) {
        if result.success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Number of results drained so far
    pub fn received(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let received = self.received();
        if received == 0 {
            return 0.0;
        }
        (self.succeeded as f64 / received as f64) * 100.0
    }
}

/// Prints the report to stdout in a formatted manner
pub fn print_report(report: &RunReport) {
    println!("=== Survey Summary ===");
    println!("  Links checked: {}", report.submitted);
    println!("  Succeeded: {}", report.succeeded);
    println!("  Failed: {}", report.failed);
    println!(
        "  Success Rate: {:.1}% in {} ms",
        report.success_rate(),
        report.elapsed.as_millis()
    );
}
