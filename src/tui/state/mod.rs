//! State management for the request explorer TUI.
//!
//! This module provides the list cursor and the filter prompt. Filter and
//! sort state itself lives in the explorer.

mod filter_prompt;
mod list_cursor;

pub use filter_prompt::FilterPrompt;
pub use list_cursor::ListCursor;
