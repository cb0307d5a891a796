//! `bubbletea_rs::Model` implementation for [`ExplorerApp`].
//!
//! `init` starts the first load, `update` turns framework events into
//! [`AppMsg`] values, and `view` assembles a frame that exactly fills the
//! terminal.

use std::any::Any;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};

use super::{ExplorerApp, Screen};
use crate::tui::components::fit_to_width;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;
use crate::tui::storage;

impl Model for ExplorerApp {
    fn init() -> (Self, Option<Cmd>) {
        let (width, height) = storage::get_initial_terminal_size();
        let mut model = Self::with_dimensions(
            storage::get_session(),
            storage::get_catalog(),
            storage::get_telemetry_sink(),
            width,
            height,
        );

        // The first fetch starts straight away; its result arrives as
        // `AppMsg::LoadFinished`.
        let cmd = model.handle_message(&AppMsg::RefreshRequested);

        (model, cmd)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            // The help overlay swallows the key that closes it.
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            return map_key_to_message_with_context(key, self.input_context())
                .and_then(|mapped| self.handle_message(&mapped));
        }

        msg.downcast_ref::<WindowSizeMsg>().and_then(|size| {
            self.handle_message(&AppMsg::WindowResized {
                width: size.width,
                height: size.height,
            })
        })
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&Self::render_help_overlay());
        }

        let mut output = self.render_header();
        match self.screen {
            Screen::RequestList => output.push_str(&self.render_list_screen()),
            Screen::RequestDetail { .. } => output.push_str(&self.render_detail_screen()),
        }

        // Keep the status bar on the last row.
        let body_lines = output.lines().count();
        let target = (self.height as usize).saturating_sub(1);
        output.push_str(&"\n".repeat(target.saturating_sub(body_lines)));
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl ExplorerApp {
    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        match self.screen {
            Screen::RequestDetail { .. } => InputContext::RequestDetail,
            Screen::RequestList if self.prompt.is_some() => InputContext::FilterPrompt,
            Screen::RequestList => InputContext::RequestList,
        }
    }

    /// Fits the frame to the terminal: exactly `height` rows, each padded to
    /// one column short of the width so the terminal never autowraps.
    fn normalise_viewport(&self, output: &str) -> String {
        let row_width = (self.width as usize).saturating_sub(1).max(1);
        let rows = (self.height as usize).max(1);

        let mut frame = String::new();
        for line in output.lines().chain(std::iter::repeat("")).take(rows) {
            frame.push_str(&fit_to_width(line, row_width));
            frame.push('\n');
        }
        frame
    }
}
