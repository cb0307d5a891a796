//! Navigation handlers and cursor management.
//!
//! Each handler moves the cursor within the visible rows and then scrolls so
//! the cursor stays inside the list viewport.

use bubbletea_rs::Cmd;

use super::ExplorerApp;

impl ExplorerApp {
    fn max_index(&self) -> usize {
        self.visible_count().saturating_sub(1)
    }

    const fn scroll_to_cursor(&mut self) {
        self.cursor.keep_visible(self.request_list.visible_height());
    }

    /// Handles cursor up navigation.
    pub(super) const fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.cursor.move_up(1);
        self.scroll_to_cursor();
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        let max_index = self.max_index();
        self.cursor.move_down(1, max_index);
        self.scroll_to_cursor();
        None
    }

    /// Handles page up navigation.
    pub(super) const fn handle_page_up(&mut self) -> Option<Cmd> {
        let page_size = self.request_list.visible_height();
        self.cursor.move_up(page_size);
        self.scroll_to_cursor();
        None
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        let page_size = self.request_list.visible_height();
        let max_index = self.max_index();
        self.cursor.move_down(page_size, max_index);
        self.scroll_to_cursor();
        None
    }

    /// Handles Home key navigation.
    pub(super) const fn handle_home(&mut self) -> Option<Cmd> {
        self.cursor.home();
        None
    }

    /// Handles End key navigation.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        let max_index = self.max_index();
        self.cursor.move_down(max_index, max_index);
        self.scroll_to_cursor();
        None
    }
}
