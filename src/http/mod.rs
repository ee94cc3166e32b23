//! HTTP transport module
//!
//! Issues single GET requests against the speedrun.com API.
//!
//! # Features
//!
//! - **Rate-limit retries**: The service answers `420` when it wants the
//!   client to slow down; requests are retried after a fixed backoff
//! - **Error envelopes**: `{"message": ...}` bodies become typed errors
//! - **Throttling**: Optional client-side token bucket using governor

mod client;
mod rate_limit;
mod request;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use request::Request;
