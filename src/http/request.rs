//! Request descriptor

use crate::types::StringMap;

/// A single GET request: an endpoint path plus optional headers.
///
/// Built with the consuming setters and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    endpoint: String,
    headers: StringMap,
}

impl Request {
    /// Create a request for an endpoint (path plus query string)
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: StringMap::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add several headers
    #[must_use]
    pub fn headers(mut self, headers: &StringMap) -> Self {
        self.headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn header_map(&self) -> &StringMap {
        &self.headers
    }
}

impl From<&str> for Request {
    fn from(endpoint: &str) -> Self {
        Self::new(endpoint)
    }
}

impl From<String> for Request {
    fn from(endpoint: String) -> Self {
        Self::new(endpoint)
    }
}
