//! Response decoder module
//!
//! # Overview
//!
//! The service wraps every payload in an envelope: `{"data": ...}` for single
//! resources and lists, with an extra `pagination` object on paged lists.
//! Embedded sub-resources are wrapped once more (`"game": {"data": {...}}`).
//! Callers pick the envelope type matching the endpoint and [`decode`] maps the
//! body into it strictly.

mod types;

pub use types::{Embedded, Envelope, ErrorEnvelope, PagedEnvelope, Pagination};

use crate::error::Result;
use serde::de::DeserializeOwned;

/// Deserialize a raw JSON body into `T`.
///
/// Schema mismatches are returned as [`Error::Deserialize`](crate::Error::Deserialize)
/// and never retried.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Deserialize a raw JSON body into an existing destination
pub fn decode_into<T: DeserializeOwned>(body: &[u8], into: &mut T) -> Result<()> {
    *into = decode(body)?;
    Ok(())
}

#[cfg(test)]
mod tests;
