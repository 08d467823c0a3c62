//! HTTP fetcher implementation
//!
//! This module handles every outbound request of a survey:
//! - Building one HTTP client from an explicit [`FetchConfig`]
//! - Bounding each request with a fixed timeout
//! - Timing each request up to the arrival of the response headers
//! - Classifying transport failures

use crate::config::Config;
use reqwest::{redirect::Policy, Client, Response, StatusCode};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Maximum redirect hops followed per request
const MAX_REDIRECTS: usize = 10;

/// Immutable settings for building a [`Fetcher`]
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Timeout for the whole request, connection included
    pub timeout: Duration,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl FetchConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.survey.request_timeout(),
            user_agent: config.user_agent.header_value(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Transport-level failure: no HTTP response was received
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("could not connect to {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },
}

/// A response whose headers have arrived
///
/// The body has not been read yet. Dropping `response` releases the
/// underlying connection.
#[derive(Debug)]
pub struct Fetched {
    pub status: StatusCode,

    /// Time from sending the request to receiving the headers
    pub elapsed: Duration,

    pub response: Response,
}

/// Performs timed GET requests with a shared, read-only client
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Builds a fetcher from its configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Timeout and user agent for every request
    ///
    /// # Returns
    ///
    /// * `Ok(Fetcher)` - Successfully built HTTP client
    /// * `Err(reqwest::Error)` - Failed to build client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use link_survey::survey::{FetchConfig, Fetcher};
    /// use std::time::Duration;
    ///
    /// let config = FetchConfig {
    ///     timeout: Duration::from_secs(10),
    ///     user_agent: "link-survey/1.0.0".to_string(),
    /// };
    ///
    /// let fetcher = Fetcher::new(&config).unwrap();
    /// ```
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// The timeout applied to every request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a GET request and waits for the response headers
    ///
    /// Any HTTP status counts as a response; only transport failures
    /// (DNS, refused connection, timeout, malformed URL) are errors.
    pub async fn fetch(&self, url: &str) -> Result<Fetched, FetchError> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let elapsed = start.elapsed();

        Ok(Fetched {
            status: response.status(),
            elapsed,
            response,
        })
    }
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url, source: error }
    } else {
        FetchError::Request { url, source: error }
    }
}
