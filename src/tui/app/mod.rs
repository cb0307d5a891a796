//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state for the request explorer TUI.
//! The list screen owns a [`RequestExplorer`]; opening a request drops it and
//! shows the detail screen, and going back builds a fresh explorer for the
//! same session, which refetches and replays the remembered filters.
//!
//! # Module Structure
//!
//! - `routing`: Screen-aware message routing and category dispatch
//! - `navigation`: Cursor movement handlers
//! - `filter_handlers`: Filter prompt and applied-filter handlers
//! - `sort_handlers`: Sort field and direction handlers
//! - `load_handlers`: Fetch commands and load completion
//! - `lifecycle_handlers`: Quit, help and resize handling
//! - `layout`: Height calculations
//! - `rendering`: View rendering methods
//! - `model_impl`: `bubbletea_rs::Model` implementation

use std::fmt;
use std::sync::Arc;

use crate::api::RequestRecord;
use crate::explorer::{RequestExplorer, RequestsSession, Route};
use crate::i18n::Catalog;
use crate::telemetry::TelemetrySink;

use super::bridge::{NotificationQueue, PendingRoute};
use super::components::RequestListComponent;
use super::state::{FilterPrompt, ListCursor};

mod filter_handlers;
mod layout;
mod lifecycle_handlers;
mod load_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod routing;
mod sort_handlers;

/// Rows used by the header and status bar.
const FRAME_CHROME_HEIGHT: usize = 2;

/// Minimum number of request rows kept visible.
const MIN_LIST_HEIGHT: usize = 1;

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Screen {
    /// The request list with its toolbar.
    RequestList,
    /// The detail view opened by a row selection.
    RequestDetail {
        /// Route the explorer navigated to.
        route: Route,
        /// The selected record, captured before the explorer was dropped.
        record: Option<RequestRecord>,
    },
}

/// Main application model for the request explorer TUI.
pub struct ExplorerApp {
    /// Explorer behind the list screen; `None` while the detail screen shows.
    pub(crate) explorer: Option<RequestExplorer>,
    /// Current screen.
    pub(crate) screen: Screen,
    /// Cursor over the visible rows.
    pub(crate) cursor: ListCursor,
    /// Open filter prompt, if any.
    pub(crate) prompt: Option<FilterPrompt>,
    /// Most recent user-visible error, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Request list component.
    request_list: RequestListComponent,
    /// Session shared by every explorer this app builds.
    session: RequestsSession,
    catalog: Arc<Catalog>,
    telemetry: Arc<dyn TelemetrySink>,
    /// Notifications raised by the explorer, drained after each call.
    notifications: NotificationQueue,
    /// Navigation requested by the explorer, taken after each row selection.
    pending_route: PendingRoute,
    /// Id of the most recently started fetch. Results carrying any other id
    /// are stale.
    load_id: u64,
}

impl fmt::Debug for ExplorerApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerApp")
            .field("explorer", &self.explorer)
            .field("screen", &self.screen)
            .field("cursor", &self.cursor)
            .field("prompt", &self.prompt)
            .field("error", &self.error)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .field("load_id", &self.load_id)
            .finish_non_exhaustive()
    }
}

impl ExplorerApp {
    /// Creates an application showing an empty list for `session`.
    ///
    /// No fetch is started; `init()` and [`Self::handle_message`] with
    /// `RefreshRequested` do that.
    #[must_use]
    pub fn new(
        session: RequestsSession,
        catalog: Arc<Catalog>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        let explorer = RequestExplorer::new(
            session.clone(),
            Arc::clone(&catalog),
            Arc::clone(&telemetry),
        );
        let mut app = Self {
            explorer: Some(explorer),
            screen: Screen::RequestList,
            cursor: ListCursor::new(),
            prompt: None,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            request_list: RequestListComponent::new(),
            session,
            catalog,
            telemetry,
            notifications: NotificationQueue::default(),
            pending_route: PendingRoute::default(),
            load_id: 0,
        };
        app.set_visible_list_height();
        app
    }

    /// Creates an application with explicit terminal dimensions.
    #[must_use]
    pub fn with_dimensions(
        session: RequestsSession,
        catalog: Arc<Catalog>,
        telemetry: Arc<dyn TelemetrySink>,
        width: u16,
        height: u16,
    ) -> Self {
        let mut app = Self::new(session, catalog, telemetry);
        app.width = width;
        app.height = height;
        app.set_visible_list_height();
        app
    }

    /// Builds a fresh explorer for the app's session.
    fn build_explorer(&self) -> RequestExplorer {
        RequestExplorer::new(
            self.session.clone(),
            Arc::clone(&self.catalog),
            Arc::clone(&self.telemetry),
        )
    }

    /// Explorer behind the list screen, if it is showing.
    #[must_use]
    pub const fn explorer(&self) -> Option<&RequestExplorer> {
        self.explorer.as_ref()
    }

    /// Visible rows, or an empty slice while the detail screen shows.
    #[must_use]
    pub fn visible_rows(&self) -> &[RequestRecord] {
        self.explorer
            .as_ref()
            .map(RequestExplorer::visible)
            .unwrap_or_default()
    }

    /// Number of visible rows.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_rows().len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.cursor_position
    }

    /// Returns the row under the cursor, if any.
    #[must_use]
    pub fn selected_request(&self) -> Option<&RequestRecord> {
        self.visible_rows().get(self.cursor.cursor_position)
    }

    /// Returns the id of the request the detail screen shows, if it is
    /// showing.
    #[must_use]
    pub const fn detail_request_id(&self) -> Option<u64> {
        match &self.screen {
            Screen::RequestDetail {
                route: Route::RequestDetails { request_id },
                ..
            } => Some(*request_id),
            Screen::RequestList => None,
        }
    }

    /// Most recent user-visible error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the filter prompt is open.
    #[must_use]
    pub const fn is_prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    /// Clamps the cursor after the visible rows changed.
    pub(crate) fn clamp_cursor(&mut self) {
        let count = self.visible_count();
        self.cursor.clamp(count);
        self.cursor.keep_visible(self.request_list.visible_height());
    }
}
