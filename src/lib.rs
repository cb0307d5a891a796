//! Docket library crate for exploring service requests.
//!
//! The library queries the `requests` collection of a collections API,
//! keeps a filtered and sorted working copy of the records in a
//! [`RequestExplorer`], and remembers filter and sort choices in a
//! [`RequestsSession`] so they survive navigation to a request's details.
//! A bubbletea-rs terminal interface sits on top in [`tui`].

pub mod api;
pub mod config;
pub mod explorer;
pub mod i18n;
pub mod telemetry;
pub mod tui;

pub use api::{
    ApiCredentials, ApiEndpoint, ApiError, ApprovalState, CollectionsGateway,
    HttpCollectionsGateway, QueryOptions, RequestRecord,
};
pub use config::{DocketConfig, OperationMode};
pub use explorer::{
    AppliedFilter, FilterField, Navigator, Notifier, RequestExplorer, RequestsSession, Route,
    SortField, SortState,
};
pub use i18n::Catalog;
pub use telemetry::{
    NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink,
};
