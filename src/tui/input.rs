//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on what currently
//! has focus: the request list, the filter prompt or the detail view.

use crossterm::event::KeyCode;

use super::messages::AppMsg;

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The request list and its toolbar.
    RequestList,
    /// The filter prompt, which captures printable keys as text.
    FilterPrompt,
    /// The request detail view.
    RequestDetail,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::RequestList => map_list_key(key.key),
        InputContext::FilterPrompt => map_prompt_key(key.key),
        InputContext::RequestDetail => map_detail_key(key.key),
    }
}

const fn map_list_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('/' | 'f') => Some(AppMsg::OpenFilterPrompt),
        KeyCode::Char('x') => Some(AppMsg::RemoveLastFilter),
        KeyCode::Esc => Some(AppMsg::ClearFilters),
        KeyCode::Char('s') => Some(AppMsg::CycleSortField),
        KeyCode::Char('S') => Some(AppMsg::ToggleSortDirection),
        KeyCode::Enter => Some(AppMsg::OpenSelected),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

const fn map_prompt_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Esc => Some(AppMsg::PromptCancel),
        KeyCode::Enter => Some(AppMsg::PromptSubmit),
        KeyCode::Backspace => Some(AppMsg::PromptBackspace),
        KeyCode::Tab => Some(AppMsg::PromptNextField),
        KeyCode::Up | KeyCode::Down => Some(AppMsg::PromptNextValue),
        KeyCode::Char(character) => Some(AppMsg::PromptInput(character)),
        _ => None,
    }
}

const fn map_detail_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            Some(AppMsg::Back)
        }
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
