//! Rendering logic for the request explorer TUI.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::{ExplorerApp, Screen};
use crate::explorer::RequestExplorer;
use crate::tui::components::{
    RequestDetailComponent, RequestDetailViewContext, RequestListViewContext, ToolbarComponent,
    ToolbarViewContext,
};

impl ExplorerApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = self.catalog.tr("Docket - Requests");
        let loading = self
            .explorer
            .as_ref()
            .is_some_and(RequestExplorer::is_loading);
        let loading_indicator = if loading {
            format!(" [{}]", self.catalog.tr("Loading..."))
        } else {
            String::new()
        };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the toolbar, column heading and visible rows.
    pub(super) fn render_list_screen(&self) -> String {
        let Some(explorer) = self.explorer.as_ref() else {
            return String::new();
        };
        let max_width = (self.width as usize).max(1);

        let toolbar_ctx = ToolbarViewContext {
            toolbar: explorer.toolbar(),
            catalog: explorer.catalog(),
            prompt: self.prompt.as_ref(),
            max_width,
        };
        let list_ctx = RequestListViewContext {
            rows: explorer.visible(),
            catalog: explorer.catalog(),
            cursor_position: self.cursor.cursor_position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: self.calculate_list_height(),
            max_width,
            loading: explorer.is_loading(),
        };

        let mut output = ToolbarComponent::view(&toolbar_ctx);
        output.push_str(&self.request_list.view(&list_ctx));
        output
    }

    /// Renders the detail screen body.
    pub(super) fn render_detail_screen(&self) -> String {
        let Screen::RequestDetail { route, record } = &self.screen else {
            return String::new();
        };
        RequestDetailComponent::view(&RequestDetailViewContext {
            route: *route,
            record: record.as_ref(),
            catalog: &self.catalog,
            max_width: (self.width as usize).max(1),
            max_height: self.body_height(),
        })
    }

    /// Renders the status bar with the latest error or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("{}: {error}\n", self.catalog.tr("Error"));
        }

        let hints = match (&self.screen, self.prompt.is_some()) {
            (Screen::RequestDetail { .. }, _) => "Esc:back  ?:help  q:quit",
            (Screen::RequestList, true) => {
                "Enter:apply  Tab:next field  Up/Down:change value  Esc:cancel"
            }
            (Screen::RequestList, false) => self.request_list_status_hints(),
        };
        format!("{hints}\n")
    }

    const fn request_list_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  j/k:move  Enter:open  /:filter  s:sort"
        } else {
            "j/k:move  Enter:open  /:filter  x:drop filter  Esc:clear  s:sort  S:reverse  r:refresh  ?:help  q:quit"
        }
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first request
  End, G     Go to last request
  Enter      Open request details

Filtering:
  /, f       Add a filter
  x          Remove the last filter
  Esc        Clear all filters

Filter prompt:
  text keys  Type the filter value
  Tab        Next filter field
  Up/Down    Change status value
  Enter      Apply filter
  Esc        Cancel

Sorting:
  s          Sort by next field
  S          Reverse sort direction

Details:
  Esc, h     Back to the list

Other:
  r          Reload requests
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
