//! HTTP client with rate-limit retries
//!
//! Provides the transport used by every accessor:
//! - Retries while the service answers with the rate-limit status
//! - Error envelope parsing for failed requests
//! - Optional client-side throttling

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::request::Request;
use crate::decode::{self, ErrorEnvelope};
use crate::error::{Error, Result};
use crate::types::{StringMap, API_BASE_URL, RATE_LIMIT_STATUS};
use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Delay before retrying a rate-limited request
    pub rate_limit_backoff: Duration,
    /// How many times a rate-limited request is retried
    pub max_rate_limit_retries: u32,
    /// Client-side throttle configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit_backoff: Duration::from_secs(2),
            max_rate_limit_retries: 10,
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: StringMap::new(),
            user_agent: format!("speedrun-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the rate-limit backoff and retry cap
    pub fn rate_limit_retries(mut self, backoff: Duration, max_retries: u32) -> Self {
        self.config.rate_limit_backoff = backoff;
        self.config.max_rate_limit_retries = max_retries;
        self
    }

    /// Set the client-side throttle
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable client-side throttling
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client for the speedrun.com API.
///
/// Cheap to clone: the connection pool and throttle are shared.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Check if client-side throttling is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Perform a GET request and return the raw response body.
    ///
    /// A response with the rate-limit status is retried after
    /// `rate_limit_backoff`, at most `max_rate_limit_retries` times.
    /// Connection failures are returned immediately.
    pub async fn fetch(&self, request: &Request) -> Result<Bytes> {
        let url = self.build_url(request.endpoint());
        let max_retries = self.config.max_rate_limit_retries;

        for attempt in 0..=max_retries {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            let mut req = self.client.get(&url);

            for (key, value) in &self.config.default_headers {
                req = req.header(key.as_str(), value.as_str());
            }

            for (key, value) in request.header_map() {
                req = req.header(key.as_str(), value.as_str());
            }

            let response = req.send().await.map_err(Error::Network)?;
            let status = response.status();

            if status.as_u16() == RATE_LIMIT_STATUS {
                if attempt < max_retries {
                    warn!(
                        "Rate limited ({}), attempt {}/{}, waiting {:?}",
                        RATE_LIMIT_STATUS,
                        attempt + 1,
                        max_retries.saturating_add(1),
                        self.config.rate_limit_backoff
                    );
                    tokio::time::sleep(self.config.rate_limit_backoff).await;
                    continue;
                }
                break;
            }

            if status.as_u16() >= 400 {
                let body = response.bytes().await.unwrap_or_default();
                let message = decode::decode::<ErrorEnvelope>(&body)
                    .map(|envelope| envelope.message)
                    .unwrap_or_default();
                debug!("Request failed: GET {} -> {}", url, status.as_u16());
                return Err(Error::remote(status.as_u16(), message));
            }

            let body = response.bytes().await.map_err(Error::Network)?;
            debug!("Request succeeded: GET {} ({} bytes)", url, body.len());
            return Ok(body);
        }

        Err(Error::RateLimited {
            attempts: max_retries.saturating_add(1),
        })
    }

    /// Perform a GET request and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let body = self.fetch(request).await?;
        decode::decode(&body)
    }

    /// Build full URL from an endpoint
    pub(crate) fn build_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        format!("{base}/{endpoint}")
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
