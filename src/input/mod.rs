//! Job source: CSV input files
//!
//! This module handles:
//! - Creating a sample input file on first run
//! - Reading (name, URL) records into jobs, skipping malformed ones

mod bootstrap;
mod csv_source;

pub use bootstrap::{ensure_input_exists, SAMPLE_INPUT};
pub use csv_source::{open_jobs, read_jobs};
