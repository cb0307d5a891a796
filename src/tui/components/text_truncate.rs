//! Width-aware text helpers for fixed-width terminal columns.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so
//! wide characters in descriptions and requester names keep the table
//! aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Widths of three columns or fewer are filled with dots instead.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(ch);
        current_width = current_width.saturating_add(char_width);
    }
    format!("{truncated}...")
}

/// Truncates `text` to `width` columns and pads it with spaces to exactly
/// `width` columns.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let mut cell = truncate_to_display_width_with_ellipsis(text, width);
    let padding = width.saturating_sub(cell.width());
    cell.push_str(&" ".repeat(padding));
    cell
}

/// Keeps at most `max_height` lines, replacing the last kept line with an
/// ellipsis when anything was cut.
pub(crate) fn truncate_to_height(output: &mut String, max_height: usize) {
    if max_height == 0 || output.lines().count() <= max_height {
        return;
    }

    let kept: Vec<&str> = output.lines().take(max_height.saturating_sub(1)).collect();
    let mut truncated = kept.join("\n");
    if !truncated.is_empty() {
        truncated.push('\n');
    }
    truncated.push_str("...\n");
    *output = truncated;
}
