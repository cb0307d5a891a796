//! Request explorer: loads the requests collection and maintains a filtered,
//! sorted working copy for display.
//!
//! The explorer keeps two sequences. `requests` holds the records exactly as
//! fetched; `visible` is derived from it by applying every active filter and
//! then the active sort. Filtering always starts again from `requests`, while
//! sorting reorders `visible` in place.
//!
//! Filter and sort choices are mirrored into a [`RequestsSession`] so a new
//! explorer built for the same session (for example after returning from a
//! detail view) restores them once its data has loaded.

pub mod collaborators;
pub mod fields;
pub mod filter;
pub mod loader;
pub mod session;
pub mod sort;
pub mod view_model;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::{ApiError, CollectionsGateway, QueryOptions, RequestRecord};
use crate::i18n::Catalog;
use crate::telemetry::{TelemetryEvent, TelemetrySink};

pub use collaborators::{Navigator, Notifier, REQUEST_DETAILS_ROUTE, Route};
pub use fields::{FilterField, FilterKind, SortField, SortKind};
pub use filter::{AppliedFilter, apply_filters, parse_filters};
pub use loader::{FetchOutcome, fetch_requests};
pub use session::RequestsSession;
pub use sort::SortState;
pub use view_model::{FilterConfig, ListConfig, SortConfig, ToolbarConfig};

/// Message id of the notification shown when loading fails.
pub const LOAD_FAILURE_MESSAGE: &str = "There was an error loading the requests.";

/// State behind the request list and its toolbar.
pub struct RequestExplorer {
    requests: Vec<RequestRecord>,
    visible: Vec<RequestRecord>,
    loading: bool,
    catalog: Arc<Catalog>,
    session: RequestsSession,
    toolbar: ToolbarConfig,
    list_config: ListConfig,
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for RequestExplorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExplorer")
            .field("requests", &self.requests.len())
            .field("visible", &self.visible.len())
            .field("loading", &self.loading)
            .field("toolbar", &self.toolbar)
            .finish_non_exhaustive()
    }
}

impl RequestExplorer {
    /// Creates an explorer with no data, reading the toolbar state from
    /// `session`.
    ///
    /// Remembered filters are shown in the toolbar only when the session
    /// marks them as applied.
    #[must_use]
    pub fn new(
        session: RequestsSession,
        catalog: Arc<Catalog>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        let applied = if session.filter_applied() {
            session.filters()
        } else {
            Vec::new()
        };
        let toolbar = ToolbarConfig::new(&catalog, applied, session.sort());
        Self {
            requests: Vec::new(),
            visible: Vec::new(),
            loading: false,
            catalog,
            session,
            toolbar,
            list_config: ListConfig::default(),
            telemetry,
        }
    }

    /// Marks the explorer as loading and returns the query to issue.
    pub fn begin_load(&mut self) -> QueryOptions {
        self.loading = true;
        QueryOptions::requests()
    }

    /// Completes a fetch started with [`Self::begin_load`].
    ///
    /// On success the records become the full data set, the working copy is
    /// rebuilt and filters remembered by the session are replayed. On failure
    /// exactly one error notification is raised and the data is left as it
    /// was.
    pub fn finish_load(&mut self, outcome: FetchOutcome, notifier: &dyn Notifier) {
        let latency_ms = outcome.latency_ms();
        let decoded = outcome.result.and_then(|page| page.request_records());
        self.loading = false;

        match decoded {
            Ok(records) => {
                debug!(count = records.len(), latency_ms, "requests loaded");
                self.telemetry.record(TelemetryEvent::RequestsLoaded {
                    request_count: records.len(),
                    latency_ms,
                });
                self.requests = records;
                self.replay_session();
            }
            Err(error) => self.report_load_failure(&error, notifier),
        }
    }

    /// Fetches the requests through `gateway` and completes the load.
    pub async fn load(&mut self, gateway: &dyn CollectionsGateway, notifier: &dyn Notifier) {
        let options = self.begin_load();
        let outcome = fetch_requests(gateway, &options).await;
        self.finish_load(outcome, notifier);
    }

    fn replay_session(&mut self) {
        if self.session.filter_applied() {
            let filters = self.session.filters();
            self.session.set_filter_applied(false);
            self.filter_change(filters);
        } else {
            self.apply_filters();
        }
    }

    fn report_load_failure(&self, error: &ApiError, notifier: &dyn Notifier) {
        warn!(%error, "failed to load requests");
        self.telemetry.record(TelemetryEvent::RequestsLoadFailed {
            message: error.to_string(),
        });
        notifier.error(self.catalog.tr(LOAD_FAILURE_MESSAGE));
    }

    /// Replaces the applied filters, remembers them in the session and
    /// re-derives the working copy.
    pub fn filter_change(&mut self, filters: Vec<AppliedFilter>) {
        self.session.set_filters(filters.clone());
        self.toolbar.filter_config.applied_filters = filters;
        self.apply_filters();
    }

    /// Rebuilds the working copy from the full data set, re-sorts it and
    /// refreshes the result count.
    pub fn apply_filters(&mut self) {
        self.visible = apply_filters(
            &self.requests,
            &self.toolbar.filter_config.applied_filters,
            &self.catalog,
        );
        let state = self.toolbar.sort_config.state;
        self.sort_change(state.current_field, state.is_ascending);
    }

    /// Sorts the working copy in place, remembers the choice in the session
    /// and refreshes the result count.
    pub fn sort_change(&mut self, field: SortField, is_ascending: bool) {
        let state = SortState::new(field, is_ascending);
        self.toolbar.sort_config.state = state;
        state.sort(&mut self.visible);
        self.session.set_sort(field, is_ascending);
        self.toolbar.filter_config.results_count = self.visible.len();
    }

    /// Navigates to the detail view of the visible row at `row`.
    ///
    /// Returns `false` when no such row exists.
    #[must_use]
    pub fn handle_click(&self, row: usize, navigator: &dyn Navigator) -> bool {
        let Some(record) = self.visible.get(row) else {
            return false;
        };
        navigator.go(Route::RequestDetails {
            request_id: record.id,
        });
        true
    }

    /// Records as fetched.
    #[must_use]
    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }

    /// Filtered and sorted working copy.
    #[must_use]
    pub fn visible(&self) -> &[RequestRecord] {
        &self.visible
    }

    /// `true` while a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Size of the working copy as shown by the toolbar.
    #[must_use]
    pub const fn results_count(&self) -> usize {
        self.toolbar.filter_config.results_count
    }

    /// Toolbar model.
    #[must_use]
    pub const fn toolbar(&self) -> &ToolbarConfig {
        &self.toolbar
    }

    /// Filters currently applied.
    #[must_use]
    pub fn applied_filters(&self) -> &[AppliedFilter] {
        &self.toolbar.filter_config.applied_filters
    }

    /// Active sort.
    #[must_use]
    pub const fn sort_state(&self) -> SortState {
        self.toolbar.sort_config.state
    }

    /// List presentation options.
    #[must_use]
    pub const fn list_config(&self) -> &ListConfig {
        &self.list_config
    }

    /// Translation catalog used for labels and notifications.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Session the explorer mirrors its state into.
    #[must_use]
    pub const fn session(&self) -> &RequestsSession {
        &self.session
    }
}
