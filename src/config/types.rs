use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for Link-Survey
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub survey: SurveyConfig,
    pub input: InputConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// Worker pool and request behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Number of concurrent workers
    pub workers: usize,

    /// Timeout applied to every request (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Buffer size of the job queue
    #[serde(rename = "queue-capacity")]
    pub queue_capacity: usize,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            workers: 5,
            request_timeout_secs: 10,
            queue_capacity: 100,
        }
    }
}

impl SurveyConfig {
    /// The per-request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Where jobs are read from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the CSV file of (name, URL) records
    pub path: PathBuf,

    /// Write a sample file when the input does not exist
    #[serde(rename = "create-if-missing")]
    pub create_if_missing: bool,

    /// Skip the first record
    #[serde(rename = "has-header")]
    pub has_header: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("links.csv"),
            create_if_missing: true,
            has_header: true,
        }
    }
}

/// User agent identification
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub name: String,
    pub version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}
