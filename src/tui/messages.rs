//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::explorer::FetchOutcome;

/// Messages for the request explorer TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to the first row.
    Home,
    /// Move cursor to the last row.
    End,

    // Filtering
    /// Open the filter prompt on the first filter field.
    OpenFilterPrompt,
    /// Type a character into the filter prompt.
    PromptInput(char),
    /// Delete the last character of the filter prompt.
    PromptBackspace,
    /// Move the filter prompt to the next field.
    PromptNextField,
    /// Move a select prompt to its next option.
    PromptNextValue,
    /// Add the prompt's filter to the applied filters.
    PromptSubmit,
    /// Close the filter prompt without applying anything.
    PromptCancel,
    /// Remove the most recently applied filter.
    RemoveLastFilter,
    /// Remove every applied filter.
    ClearFilters,

    // Sorting
    /// Sort by the next sort field, keeping the direction.
    CycleSortField,
    /// Flip the sort direction.
    ToggleSortDirection,

    // Routing
    /// Open the detail view for the row under the cursor.
    OpenSelected,
    /// Leave the detail view and return to the list.
    Back,

    // Data loading
    /// Fetch the requests again.
    RefreshRequested,
    /// A fetch finished.
    LoadFinished {
        /// Id the app gave the fetch when it started.
        load_id: u64,
        /// What the fetch returned.
        outcome: FetchOutcome,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns `true` for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns `true` for filter prompt and applied-filter messages.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::OpenFilterPrompt
                | Self::PromptInput(_)
                | Self::PromptBackspace
                | Self::PromptNextField
                | Self::PromptNextValue
                | Self::PromptSubmit
                | Self::PromptCancel
                | Self::RemoveLastFilter
                | Self::ClearFilters
        )
    }

    /// Returns `true` for sort messages.
    #[must_use]
    pub const fn is_sort(&self) -> bool {
        matches!(self, Self::CycleSortField | Self::ToggleSortDirection)
    }

    /// Returns `true` for messages that switch between list and detail.
    #[must_use]
    pub const fn is_routing(&self) -> bool {
        matches!(self, Self::OpenSelected | Self::Back)
    }

    /// Returns `true` for data loading messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::RefreshRequested | Self::LoadFinished { .. })
    }
}
