//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`interactive`]: Terminal explorer over the requests collection
//! - [`plain_listing`]: Print the filtered, sorted requests and exit
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use docket::tui::ExplorerContext;
use docket::{ApiError, Catalog, DocketConfig, HttpCollectionsGateway, RequestsSession};

pub mod interactive;
pub mod output;
pub mod plain_listing;

/// Builds the gateway, session and catalog described by `config`.
///
/// The session is seeded with the configured filters and sort so the first
/// load already shows them.
///
/// # Errors
///
/// Returns an [`ApiError`] when the URL, credentials, filters, sort field or
/// catalog path are missing or invalid.
pub fn explorer_context(config: &DocketConfig) -> Result<ExplorerContext, ApiError> {
    let endpoint = config.require_api_url()?;
    let credentials = config.resolve_credentials()?;
    let gateway = HttpCollectionsGateway::new(endpoint, credentials, config.timeout())?;

    let session = RequestsSession::seeded(config.applied_filters()?, config.sort_state()?);
    let catalog = config
        .catalog_path()
        .map_or_else(|| Ok(Catalog::english()), Catalog::load)?;

    Ok(ExplorerContext {
        gateway: Arc::new(gateway),
        session,
        catalog: Arc::new(catalog),
    })
}
