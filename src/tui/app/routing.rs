//! Message routing and dispatch logic.
//!
//! Messages are first routed by what has focus: the detail screen accepts
//! only `Back` plus data and lifecycle messages, and an open filter prompt
//! blocks list movement, sorting and row selection. Everything else is
//! dispatched by message category.

use bubbletea_rs::Cmd;

use super::{ExplorerApp, Screen};
use crate::explorer::Route;
use crate::tui::messages::AppMsg;
use crate::tui::state::ListCursor;

/// Result of screen-based routing.
enum ScreenRouting {
    Handled(Option<Cmd>),
    Fallthrough,
}

impl ExplorerApp {
    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It first applies
    /// screen-based routing, then falls back to category-based dispatch.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if let ScreenRouting::Handled(result) = self.route_by_screen(msg) {
            return result;
        }
        self.dispatch_by_message_category(msg)
    }

    /// Blocks messages that make no sense for the focused screen or prompt.
    const fn route_by_screen(&self, msg: &AppMsg) -> ScreenRouting {
        let on_detail = matches!(self.screen, Screen::RequestDetail { .. });
        if on_detail && (msg.is_navigation() || msg.is_filter() || msg.is_sort()) {
            return ScreenRouting::Handled(None);
        }
        if on_detail && matches!(msg, AppMsg::OpenSelected) {
            return ScreenRouting::Handled(None);
        }

        let prompt_blocks = self.prompt.is_some()
            && (msg.is_navigation() || msg.is_sort() || msg.is_routing());
        if prompt_blocks {
            return ScreenRouting::Handled(None);
        }

        ScreenRouting::Fallthrough
    }

    /// Dispatches messages based on their category.
    fn dispatch_by_message_category(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_sort() {
            return self.handle_sort_msg(msg);
        }
        if msg.is_routing() {
            return self.handle_routing_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    /// Dispatches row selection and back navigation.
    fn handle_routing_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenSelected => self.handle_open_selected(),
            AppMsg::Back => self.handle_back(),
            _ => {
                // Unreachable: caller filters to routing messages.
                None
            }
        }
    }

    /// Asks the explorer to navigate to the row under the cursor and, when
    /// it does, switches to the detail screen.
    ///
    /// The explorer is dropped with the list screen; its filters and sort
    /// survive in the session.
    fn handle_open_selected(&mut self) -> Option<Cmd> {
        let explorer = self.explorer.as_ref()?;
        if !explorer.handle_click(self.cursor.cursor_position, &self.pending_route) {
            return None;
        }
        let route = self.pending_route.take()?;
        let Route::RequestDetails { request_id } = route;
        let record = explorer
            .visible()
            .iter()
            .find(|record| record.id == request_id)
            .cloned();

        self.screen = Screen::RequestDetail { route, record };
        self.explorer = None;
        self.prompt = None;
        self.error = None;
        None
    }

    /// Returns to the list with a fresh explorer and starts its load.
    fn handle_back(&mut self) -> Option<Cmd> {
        if self.screen == Screen::RequestList {
            return None;
        }
        self.screen = Screen::RequestList;
        self.cursor = ListCursor::new();
        let mut explorer = self.build_explorer();
        let options = explorer.begin_load();
        self.explorer = Some(explorer);
        Some(self.start_fetch(options))
    }
}
