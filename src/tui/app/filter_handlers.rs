//! Filter prompt and applied-filter handlers.
//!
//! Every change to the applied filters goes through
//! `RequestExplorer::filter_change`, which re-derives the working copy,
//! re-sorts it and remembers the filters in the session.

use bubbletea_rs::Cmd;

use super::ExplorerApp;
use crate::explorer::AppliedFilter;
use crate::explorer::fields::status_labels;
use crate::tui::messages::AppMsg;
use crate::tui::state::FilterPrompt;

impl ExplorerApp {
    /// Dispatches filter messages to their handlers.
    ///
    /// The toolbar grows by a line while the prompt is open, so the list
    /// height is recalculated afterwards.
    pub(super) fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let cmd = match msg {
            AppMsg::OpenFilterPrompt => self.handle_open_prompt(),
            AppMsg::PromptInput(character) => {
                self.edit_prompt(|prompt| prompt.push_char(*character))
            }
            AppMsg::PromptBackspace => self.edit_prompt(FilterPrompt::backspace),
            AppMsg::PromptNextField => self.edit_prompt(FilterPrompt::next_field),
            AppMsg::PromptNextValue => self.edit_prompt(FilterPrompt::next_value),
            AppMsg::PromptSubmit => self.handle_prompt_submit(),
            AppMsg::PromptCancel => {
                self.prompt = None;
                None
            }
            AppMsg::RemoveLastFilter => self.handle_remove_last_filter(),
            AppMsg::ClearFilters => self.handle_clear_filters(),
            _ => {
                // Unreachable: caller filters to filter messages.
                None
            }
        };
        self.set_visible_list_height();
        self.cursor.keep_visible(self.request_list.visible_height());
        cmd
    }

    fn handle_open_prompt(&mut self) -> Option<Cmd> {
        let explorer = self.explorer.as_ref()?;
        self.prompt = Some(FilterPrompt::new(status_labels(explorer.catalog())));
        None
    }

    fn edit_prompt(&mut self, edit: impl FnOnce(&mut FilterPrompt)) -> Option<Cmd> {
        if let Some(prompt) = self.prompt.as_mut() {
            edit(prompt);
        }
        None
    }

    /// Adds the prompt's filter to the applied filters and closes the prompt.
    ///
    /// An empty value closes the prompt without changing anything, and a
    /// filter identical to one already applied is not added twice.
    fn handle_prompt_submit(&mut self) -> Option<Cmd> {
        let filter = self.prompt.take()?.to_filter()?;
        let explorer = self.explorer.as_ref()?;
        if explorer.applied_filters().contains(&filter) {
            return None;
        }

        let mut filters = explorer.applied_filters().to_vec();
        filters.push(filter);
        self.change_filters(filters);
        None
    }

    fn handle_remove_last_filter(&mut self) -> Option<Cmd> {
        let mut filters = self.explorer.as_ref()?.applied_filters().to_vec();
        if filters.pop().is_none() {
            return None;
        }
        self.change_filters(filters);
        None
    }

    fn handle_clear_filters(&mut self) -> Option<Cmd> {
        if self.explorer.as_ref()?.applied_filters().is_empty() {
            return None;
        }
        self.change_filters(Vec::new());
        None
    }

    fn change_filters(&mut self, filters: Vec<AppliedFilter>) {
        if let Some(explorer) = self.explorer.as_mut() {
            explorer.filter_change(filters);
        }
        self.clamp_cursor();
    }
}
