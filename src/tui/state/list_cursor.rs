//! Cursor and scroll position within the visible request rows.
//!
//! The cursor is an index into the explorer's working copy, so it is the row
//! index handed to `RequestExplorer::handle_click`. It is clamped whenever the
//! working copy shrinks.

/// Cursor and scroll state for the request list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed) within the visible rows.
    pub cursor_position: usize,
    /// Number of rows scrolled from the top.
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Creates a cursor on the first row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor_position: 0,
            scroll_offset: 0,
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor and scroll are reset to 0. If the cursor
    /// exceeds the list length, it is set to the last valid index.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
        if self.scroll_offset > self.cursor_position {
            self.scroll_offset = self.cursor_position;
        }
    }

    /// Moves the cursor up by `step` rows, stopping at the first row.
    pub const fn move_up(&mut self, step: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(step);
    }

    /// Moves the cursor down by `step` rows, stopping at `max_index`.
    pub const fn move_down(&mut self, step: usize, max_index: usize) {
        let new_pos = self.cursor_position.saturating_add(step);
        self.cursor_position = if new_pos < max_index {
            new_pos
        } else {
            max_index
        };
    }

    /// Moves the cursor to the first row.
    pub const fn home(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    /// Adjusts the scroll offset so the cursor stays inside a viewport of
    /// `visible_height` rows.
    pub const fn keep_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }

        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.cursor_position >= viewport_end {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty_list(5, 0, 0)]
    #[case::past_the_end(10, 5, 4)]
    #[case::in_range(3, 10, 3)]
    fn clamp_keeps_cursor_in_range(
        #[case] start: usize,
        #[case] count: usize,
        #[case] expected: usize,
    ) {
        let mut cursor = ListCursor {
            cursor_position: start,
            scroll_offset: start,
        };
        cursor.clamp(count);
        assert_eq!(cursor.cursor_position, expected);
        assert!(cursor.scroll_offset <= cursor.cursor_position);
    }

    #[test]
    fn movement_respects_bounds() {
        let mut cursor = ListCursor::new();

        cursor.move_up(1);
        assert_eq!(cursor.cursor_position, 0);

        cursor.move_down(3, 4);
        assert_eq!(cursor.cursor_position, 3);

        cursor.move_down(3, 4);
        assert_eq!(cursor.cursor_position, 4);

        cursor.move_up(10);
        assert_eq!(cursor.cursor_position, 0);
    }

    #[test]
    fn keep_visible_scrolls_both_ways() {
        let mut cursor = ListCursor::new();
        cursor.move_down(7, 9);
        cursor.keep_visible(5);
        assert_eq!(cursor.scroll_offset, 3);

        cursor.move_up(6);
        cursor.keep_visible(5);
        assert_eq!(cursor.scroll_offset, 1);
    }
}
