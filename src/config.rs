//! Client configuration files
//!
//! A YAML file describing how the client talks to the API. Every field is
//! optional and falls back to the public service's defaults.
//!
//! ```yaml
//! base_url: https://www.speedrun.com/api/v1
//! timeout_seconds: 30
//! rate_limit_backoff_ms: 2000
//! max_rate_limit_retries: 10
//! throttle:
//!   requests_per_minute: 100
//!   burst_size: 10
//! headers:
//!   X-API-Key: my-key
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{StringMap, API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Client configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Delay before retrying a rate-limited request, in milliseconds
    #[serde(default = "default_backoff_ms")]
    pub rate_limit_backoff_ms: u64,

    /// How many times a rate-limited request is retried
    #[serde(default = "default_max_retries")]
    pub max_rate_limit_retries: u32,

    /// Client-side throttle; `null` disables it
    #[serde(default = "default_throttle")]
    pub throttle: Option<RateLimiterConfig>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: StringMap,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_backoff_ms() -> u64 {
    2000
}

fn default_max_retries() -> u32 {
    10
}

#[allow(clippy::unnecessary_wraps)]
fn default_throttle() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            rate_limit_backoff_ms: default_backoff_ms(),
            max_rate_limit_retries: default_max_retries(),
            throttle: default_throttle(),
            headers: StringMap::new(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }
        url::Url::parse(&self.base_url)?;

        if self.timeout_seconds == 0 {
            return Err(Error::config("timeout_seconds must be greater than 0"));
        }

        Ok(())
    }

    /// Convert into the HTTP client's runtime configuration
    pub fn to_http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .rate_limit_retries(
                Duration::from_millis(self.rate_limit_backoff_ms),
                self.max_rate_limit_retries,
            );

        builder = match &self.throttle {
            Some(throttle) => builder.rate_limit(throttle.clone()),
            None => builder.no_rate_limit(),
        };

        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }

        builder.build()
    }
}
