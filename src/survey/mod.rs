//! Survey module: the concurrent fetch-and-classify pipeline
//!
//! This module contains the core of the crate, including:
//! - HTTP fetching with a bounded timeout
//! - Content-Type classification and title extraction
//! - Single-job processing into a uniform result
//! - The worker pool and the coordinator that feeds and drains it

mod classifier;
mod coordinator;
mod fetcher;
mod pool;
mod processor;

pub use classifier::{classify, extract_title, is_html, Classification, ClassifyError};
pub use coordinator::{run, Coordinator, DEFAULT_QUEUE_CAPACITY};
pub use fetcher::{FetchConfig, FetchError, Fetched, Fetcher};
pub use pool::WorkerPool;
pub use processor::JobProcessor;
