//! Configuration module for Link-Survey
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file is the same as running
//! with an empty one.
//!
//! # Example
//!
//! ```no_run
//! use link_survey::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("survey.toml")).unwrap();
//! println!("Survey will use {} workers", config.survey.workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, InputConfig, SurveyConfig, UserAgentConfig};

pub use parser::{load_config, parse_config};
pub use validation::{validate, MAX_TIMEOUT_SECS, MAX_WORKERS};
