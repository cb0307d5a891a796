//! Layout helpers for the request explorer TUI.
//!
//! The list screen stacks the header, the toolbar, the column heading, the
//! request rows and the status bar. Rows get whatever the rest leaves.

use super::{ExplorerApp, FRAME_CHROME_HEIGHT, MIN_LIST_HEIGHT};
use crate::tui::components::ToolbarComponent;

/// Rows used by the column heading above the request rows.
const LIST_HEADING_HEIGHT: usize = 1;

impl ExplorerApp {
    /// Rows between the header and the status bar.
    pub(super) const fn body_height(&self) -> usize {
        (self.height as usize).saturating_sub(FRAME_CHROME_HEIGHT)
    }

    /// Calculates the number of request rows that fit on the list screen.
    pub(super) const fn calculate_list_height(&self) -> usize {
        let toolbar_height = ToolbarComponent::height(self.prompt.is_some());
        let available = self
            .body_height()
            .saturating_sub(toolbar_height)
            .saturating_sub(LIST_HEADING_HEIGHT);
        if available > MIN_LIST_HEIGHT {
            available
        } else {
            MIN_LIST_HEIGHT
        }
    }

    /// Updates the visible row count stored in the list component.
    pub(super) const fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.request_list.set_visible_height(list_height);
    }
}
