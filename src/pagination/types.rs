//! Page planning

use crate::query::append_param;
use crate::types::PAGE_SIZE_LIMIT;

/// How a request for `requested` records is split into pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    requested: usize,
    page_size: usize,
}

impl PagePlan {
    /// Plan against the service's page cap
    pub fn new(requested: usize) -> Self {
        Self::with_page_size(requested, PAGE_SIZE_LIMIT)
    }

    /// Plan against a custom page size (clamped to at least 1)
    pub fn with_page_size(requested: usize, page_size: usize) -> Self {
        Self {
            requested,
            page_size: page_size.max(1),
        }
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// One request is enough
    pub fn is_single(&self) -> bool {
        self.requested <= self.page_size
    }

    /// `ceil(requested / page_size)`, at least 1
    pub fn page_count(&self) -> usize {
        self.requested.div_ceil(self.page_size).max(1)
    }

    /// Offset of every page, in page order
    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.page_count()).map(move |page| page * self.page_size)
    }

    /// Endpoint of the single request; a zero request leaves `max` to the service
    pub fn single_endpoint(&self, endpoint: &str) -> String {
        if self.requested == 0 {
            endpoint.to_string()
        } else {
            append_param(endpoint, "max", self.requested)
        }
    }

    /// Endpoint of the page starting at `offset`
    pub fn page_endpoint(&self, endpoint: &str, offset: usize) -> String {
        let endpoint = append_param(endpoint, "max", self.page_size);
        append_param(&endpoint, "offset", offset)
    }
}
