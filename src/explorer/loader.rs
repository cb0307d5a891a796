//! Fetching the requests collection.

use std::time::{Duration, Instant};

use crate::api::{ApiError, CollectionPage, CollectionsGateway, QueryOptions, REQUESTS_COLLECTION};

/// Result of one requests fetch together with its wall-clock duration.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// Page returned by the gateway, or the failure.
    pub result: Result<CollectionPage, ApiError>,
    /// Time spent waiting on the gateway.
    pub elapsed: Duration,
}

impl FetchOutcome {
    /// Elapsed time in whole milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn latency_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Queries the requests collection with the explorer's projection.
pub async fn fetch_requests(gateway: &dyn CollectionsGateway, options: &QueryOptions) -> FetchOutcome {
    let started = Instant::now();
    let result = gateway.query(REQUESTS_COLLECTION, options).await;
    FetchOutcome {
        result,
        elapsed: started.elapsed(),
    }
}
