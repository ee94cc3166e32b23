//! # speedrun-api
//!
//! An async client for the [speedrun.com](https://www.speedrun.com) REST API.
//!
//! ## Features
//!
//! - **Typed Records**: Users, runs, games, categories, levels, regions, platforms
//! - **Concurrent Pagination**: Requests above the 200-record page cap fan out
//!   into concurrent offset pages that are merged and truncated
//! - **Rate-Limit Handling**: `420` responses are retried after a fixed backoff
//! - **Client-side Throttling**: Optional token bucket to stay under the service budget
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use speedrun_api::{PbFilter, Result, SpeedrunClient, UserFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = SpeedrunClient::new()?;
//!
//!     let user = client.user("zfg").await?;
//!     let records = client.world_records(&user.id).await?;
//!
//!     let pbs = client
//!         .personal_bests(&user.id, &PbFilter::new().game("oot").embed("category"))
//!         .await?;
//!
//!     let runners = client.users(&UserFilter::new().name("mario").max(450)).await?;
//!     println!("{} WRs, {} PBs, {} users", records.len(), pbs.len(), runners.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     SpeedrunClient                       │
//! │  users()  user()  personal_bests()  game()  run()  ...   │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴───────┬─────────────────────┐
//! │    Query     │      Paginator      │       Decode        │
//! ├──────────────┼─────────────────────┼─────────────────────┤
//! │ UserFilter   │ single request      │ Envelope            │
//! │ PbFilter     │ concurrent pages    │ PagedEnvelope       │
//! │              │ merge + truncate    │ Embedded            │
//! └──────────────┴──────────┬──────────┴─────────────────────┘
//!                           │
//! ┌─────────────────────────┴────────────────────────────────┐
//! │ HttpClient: GET, 420 retry, error envelopes, throttling  │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and constants
pub mod types;

/// HTTP transport with rate-limit retries
pub mod http;

/// Envelope-aware response decoding
pub mod decode;

/// Concurrent offset pagination
pub mod pagination;

/// Endpoint construction from filters
pub mod query;

/// API records
pub mod models;

/// Configuration files
pub mod config;

/// Typed resource accessors
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::SpeedrunClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::*;
pub use query::{PbFilter, UserFilter};
pub use types::{Direction, UserOrder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
