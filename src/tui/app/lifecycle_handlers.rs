//! Lifecycle and window handlers for the request explorer TUI.

use bubbletea_rs::Cmd;

use super::ExplorerApp;
use crate::tui::messages::AppMsg;

impl ExplorerApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    const fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.set_visible_list_height();
        self.cursor.keep_visible(self.request_list.visible_height());
        None
    }
}
