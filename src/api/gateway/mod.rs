//! Gateways for querying collections from the API.
//!
//! The trait keeps the explorer independent of HTTP so that tests can supply
//! a mock, while [`HttpCollectionsGateway`] issues the real requests.

mod error_mapping;
mod http_gateway;

pub use http_gateway::HttpCollectionsGateway;

use async_trait::async_trait;

use crate::api::error::ApiError;
use crate::api::models::CollectionPage;
use crate::api::query::QueryOptions;

/// Gateway that can query a named collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionsGateway: Send + Sync {
    /// Fetches one page of `collection` shaped by `options`.
    async fn query(
        &self,
        collection: &str,
        options: &QueryOptions,
    ) -> Result<CollectionPage, ApiError>;
}
