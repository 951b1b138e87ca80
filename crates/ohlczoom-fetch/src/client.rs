//! HTTP client for the market-data history endpoint.

use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::url;
use crate::wire::{SeriesPayload, decode_response};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint returning the `{ symbol, data }` envelope.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Retry attempts after the first failed request.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: url::default_url(),
            timeout: Duration::from_secs(30),
            max_retries: 1,
            base_delay_ms: 500,
            max_delay_ms: 5_000,
            user_agent: format!("ohlczoom/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the retry budget.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Errors that can occur while loading a series.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Body was not a valid response envelope.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A local series file could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// HTTP client with retry logic for the history endpoint.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the raw response body.
    ///
    /// Server errors (5xx), rate limiting (429) and transient transport
    /// failures are retried up to `max_retries` times. Any other
    /// non-success status fails immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries.
    pub async fn fetch_bytes(&self) -> Result<Bytes, FetchError> {
        let url = self.config.url.as_str();
        let mut attempts = 0;

        loop {
            debug!(url, attempt = attempts, "requesting series");
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response.bytes().await?);
                    }

                    if is_retryable_status(status) && attempts < self.config.max_retries {
                        attempts += 1;
                        let delay = self.calculate_backoff_delay(attempts);
                        warn!(status = status.as_u16(), ?delay, "retrying series request");
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(FetchError::Status {
                        status: status.as_u16(),
                    });
                }
                Err(e) if self.is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    warn!(error = %e, ?delay, "retrying series request");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Downloads and decodes the series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a valid,
    /// ordered series.
    pub async fn fetch_series(&self) -> Result<SeriesPayload, FetchError> {
        let body = self.fetch_bytes().await?;
        let payload = decode_response(&body)?;
        debug!(
            symbol = %payload.symbol,
            points = payload.series.len(),
            "decoded series"
        );
        Ok(payload)
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter within ±25%
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            let offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            offset as i64 - jitter_range as i64
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Determines if a transport error is worth retrying.
    fn is_retryable_error(&self, error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }
        error.is_timeout() || error.is_connect() || error.is_request()
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}
