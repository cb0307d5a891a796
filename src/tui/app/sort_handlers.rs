//! Sort field and direction handlers.

use bubbletea_rs::Cmd;

use super::ExplorerApp;
use crate::tui::messages::AppMsg;

impl ExplorerApp {
    /// Dispatches sort messages to their handlers.
    pub(super) fn handle_sort_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let explorer = self.explorer.as_mut()?;
        let state = explorer.sort_state();
        match msg {
            AppMsg::CycleSortField => {
                explorer.sort_change(state.current_field.next(), state.is_ascending);
            }
            AppMsg::ToggleSortDirection => {
                explorer.sort_change(state.current_field, !state.is_ascending);
            }
            _ => {
                // Unreachable: caller filters to sort messages.
            }
        }
        None
    }
}
