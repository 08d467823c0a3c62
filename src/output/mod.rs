//! Output module for reporting survey results
//!
//! This module handles:
//! - The sink interface the coordinator hands results to
//! - Plain-text and JSON-lines formatting of single results
//! - End-of-run statistics

mod console;
mod json;
pub mod stats;
mod traits;

pub use console::{write_block, ConsoleSink};
pub use json::JsonLinesSink;
pub use stats::{print_report, RunReport};
pub use traits::{OutputError, OutputResult, ResultSink};
