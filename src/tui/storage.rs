//! Startup context storage for the explorer TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by CLI wiring and app
//! handlers.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crossterm::terminal;

use crate::api::{ApiError, CollectionsGateway, QueryOptions};
use crate::explorer::{FetchOutcome, RequestsSession, fetch_requests};
use crate::i18n::Catalog;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the explorer context.
///
/// This is set before the TUI program starts and read by `ExplorerApp::init()`
/// and by every load command.
static EXPLORER_CONTEXT: OnceLock<ExplorerContext> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Everything the explorer needs to load and present requests.
#[derive(Clone)]
pub struct ExplorerContext {
    /// Gateway used for every (re-)load.
    pub gateway: Arc<dyn CollectionsGateway>,
    /// Filter and sort state shared by successive explorers.
    pub session: RequestsSession,
    /// Translation catalog.
    pub catalog: Arc<Catalog>,
}

/// Sets the explorer context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without it
/// every load fails with a configuration error.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_explorer_context(context: ExplorerContext) -> bool {
    EXPLORER_CONTEXT.set(context).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Returns the configured session, or a fresh one when none was set.
pub(crate) fn get_session() -> RequestsSession {
    EXPLORER_CONTEXT
        .get()
        .map(|context| context.session.clone())
        .unwrap_or_default()
}

/// Returns the configured catalog, or the English catalog when none was set.
pub(crate) fn get_catalog() -> Arc<Catalog> {
    EXPLORER_CONTEXT
        .get()
        .map_or_else(|| Arc::new(Catalog::english()), |context| Arc::clone(&context.catalog))
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Returns the live terminal size, or 80x24 when it cannot be read.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_SIZE: (u16, u16) = (80, 24);

    terminal::size()
        .ok()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .unwrap_or(DEFAULT_SIZE)
}

/// Fetches the requests collection through the configured gateway.
pub(crate) async fn fetch(options: &QueryOptions) -> FetchOutcome {
    let Some(context) = EXPLORER_CONTEXT.get() else {
        return FetchOutcome {
            result: Err(ApiError::Configuration {
                message: "explorer context not configured".to_owned(),
            }),
            elapsed: Duration::ZERO,
        };
    };
    fetch_requests(context.gateway.as_ref(), options).await
}
