//! Collections API client for request records.
//!
//! This module parses the API endpoint and credentials, encodes collection
//! queries, and decodes the returned resources into typed request records.
//! Errors are mapped into [`ApiError`] variants so that callers can report
//! failures without exposing reqwest internals.

pub mod credentials;
pub mod error;
pub mod gateway;
pub mod models;
pub mod query;

pub use credentials::{ApiCredentials, ApiEndpoint};
pub use error::ApiError;
pub use gateway::{CollectionsGateway, HttpCollectionsGateway};
pub use models::{ApprovalState, CollectionPage, Picture, RequestRecord};
pub use query::{QueryOptions, REQUESTS_COLLECTION};

#[cfg(test)]
pub use gateway::MockCollectionsGateway;
