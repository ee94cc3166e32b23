//! Pagination module
//!
//! # Overview
//!
//! The service caps every response at [`PAGE_SIZE_LIMIT`](crate::types::PAGE_SIZE_LIMIT)
//! records. Requests for more are split into offset pages that are fetched
//! concurrently and merged, then truncated to the requested count. Pages
//! carry no ordering guarantee relative to each other.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::PagePlan;

#[cfg(test)]
mod tests;
