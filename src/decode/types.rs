//! Envelope types
//!
//! Wrapper shapes the service puts around payloads.

use crate::models::Link;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// `{"data": T}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// A page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> PagedEnvelope<T> {
    /// Number of records actually returned
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Pagination block of a paged list.
///
/// Informational only; offsets are computed client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub offset: usize,
    pub max: usize,
    pub size: usize,
    pub links: Vec<Link>,
}

/// Body of a failed request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: String,
}

/// An embedded sub-resource.
///
/// Depending on the `embed` parameter the service sends the bare id, the
/// wrapped record, or `{"data": []}` when the embedded resource is null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Embedded<T> {
    Null { data: Vec<JsonValue> },
    Resource { data: T },
    Id(String),
}

impl<T> Embedded<T> {
    /// The embedded record, if it was embedded and not null
    pub fn into_resource(self) -> Option<T> {
        match self {
            Embedded::Resource { data } => Some(data),
            Embedded::Null { .. } | Embedded::Id(_) => None,
        }
    }

    /// The bare id, if the resource was not embedded
    pub fn id(&self) -> Option<&str> {
        match self {
            Embedded::Id(id) => Some(id),
            _ => None,
        }
    }
}
