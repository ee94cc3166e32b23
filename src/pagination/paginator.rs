//! Concurrent offset paginator

use super::types::PagePlan;
use crate::decode::PagedEnvelope;
use crate::error::{Error, Result};
use crate::http::{HttpClient, Request};
use crate::types::{StringMap, MAX_CONCURRENT_PAGES, PAGE_SIZE_LIMIT};
use futures::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Fetches up to `requested` records of a list endpoint
#[derive(Debug, Clone)]
pub struct Paginator<'a> {
    client: &'a HttpClient,
    page_size: usize,
    headers: StringMap,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a HttpClient) -> Self {
        Self {
            client,
            page_size: PAGE_SIZE_LIMIT,
            headers: StringMap::new(),
        }
    }

    /// Override the page size (the service rejects anything above 200)
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Send these headers with every page request
    #[must_use]
    pub fn with_headers(mut self, headers: StringMap) -> Self {
        self.headers = headers;
        self
    }

    /// Fetch up to `requested` records from `endpoint`.
    ///
    /// Requests that fit in one page are issued as a single request and
    /// returned as-is. Larger requests fan out into concurrent page requests,
    /// at most [`MAX_CONCURRENT_PAGES`] in flight. Once a page comes back
    /// short or fails, no further pages are started; pages already in flight
    /// run to completion. If any page failed the whole call fails with every
    /// page error. The merged records are truncated to `requested` and come
    /// back in no particular order.
    pub async fn paginate<T>(&self, endpoint: &str, requested: usize) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let plan = PagePlan::with_page_size(requested, self.page_size);

        if plan.is_single() {
            let page = self.fetch_page::<T>(plan.single_endpoint(endpoint)).await?;
            return Ok(page.data);
        }

        debug!(
            "Fetching {} records from {} in {} pages",
            requested,
            endpoint,
            plan.page_count()
        );

        let page_size = plan.page_size();
        let exhausted = AtomicBool::new(false);
        let accumulator = Mutex::new(Vec::new());

        let offsets = plan
            .offsets()
            .take_while(|_| !exhausted.load(Ordering::Acquire));

        let results: Vec<Result<usize>> = stream::iter(offsets)
            .map(|offset| {
                let page_endpoint = plan.page_endpoint(endpoint, offset);
                let accumulator = &accumulator;
                let exhausted = &exhausted;
                async move {
                    let page = match self.fetch_page::<T>(page_endpoint).await {
                        Ok(page) => page,
                        Err(e) => {
                            exhausted.store(true, Ordering::Release);
                            return Err(e);
                        }
                    };
                    let count = page.len();
                    if count < page_size {
                        exhausted.store(true, Ordering::Release);
                    }
                    accumulator.lock().await.extend(page.data);
                    Ok::<usize, Error>(count)
                }
            })
            .buffer_unordered(MAX_CONCURRENT_PAGES)
            .collect()
            .await;

        let errors: Vec<Error> = results
            .into_iter()
            .filter_map(std::result::Result::err)
            .collect();

        if let Some(error) = Error::from_pages(errors) {
            warn!("Paginated request to {} failed: {}", endpoint, error);
            return Err(error);
        }

        let mut records = accumulator.into_inner();
        records.truncate(requested);
        Ok(records)
    }

    async fn fetch_page<T: DeserializeOwned>(&self, endpoint: String) -> Result<PagedEnvelope<T>> {
        let request = Request::new(endpoint).headers(&self.headers);
        self.client.get_json(&request).await
    }
}
