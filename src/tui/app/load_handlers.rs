//! Fetch commands and load completion for the request explorer TUI.
//!
//! A fetch runs as a bubbletea command through the gateway held in module
//! storage and reports back with `AppMsg::LoadFinished`. Each fetch carries
//! the load id current when it started; only a result whose id is still
//! current is handed to the explorer, whose notifications surface in the
//! status bar.

use std::any::Any;

use bubbletea_rs::Cmd;
use tracing::debug;

use super::ExplorerApp;
use crate::api::QueryOptions;
use crate::explorer::FetchOutcome;
use crate::tui::messages::AppMsg;
use crate::tui::storage;

impl ExplorerApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::LoadFinished { load_id, outcome } => {
                self.handle_load_finished(*load_id, outcome)
            }
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Starts a new fetch unless one is already outstanding.
    fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        let explorer = self.explorer.as_mut()?;
        if explorer.is_loading() {
            return None;
        }
        let options = explorer.begin_load();
        Some(self.start_fetch(options))
    }

    /// Completes the explorer's outstanding load.
    ///
    /// A result from an earlier fetch, or one that arrives while the detail
    /// screen shows, is discarded.
    fn handle_load_finished(&mut self, load_id: u64, outcome: &FetchOutcome) -> Option<Cmd> {
        if load_id != self.load_id {
            debug!(load_id, current = self.load_id, "discarding stale load result");
            return None;
        }
        let Some(explorer) = self.explorer.as_mut() else {
            debug!("discarding load result for a closed explorer");
            return None;
        };
        explorer.finish_load(outcome.clone(), &self.notifications);
        self.error = self.notifications.drain().pop();
        self.clamp_cursor();
        None
    }

    /// Gives a new fetch the next load id and returns its command.
    pub(super) fn start_fetch(&mut self, options: QueryOptions) -> Cmd {
        self.load_id = self.load_id.wrapping_add(1);
        Self::fetch_cmd(options, self.load_id)
    }

    /// Creates a command that fetches the requests with `options`.
    fn fetch_cmd(options: QueryOptions, load_id: u64) -> Cmd {
        Box::pin(async move {
            let outcome = storage::fetch(&options).await;
            Some(Box::new(AppMsg::LoadFinished { load_id, outcome }) as Box<dyn Any + Send>)
        })
    }
}
