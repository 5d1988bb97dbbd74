//! Horizontal text windowing for fixed-width cells.
//!
//! All indices are byte offsets into UTF-8 strings. Window boundaries always
//! land on character boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn clamp_to_char_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Byte offset just past the character at `cursor` (the cursor cell itself
/// must be visible).
fn cursor_cell_end(text: &str, cursor: usize) -> usize {
    let cursor = clamp_to_char_boundary(text, cursor);
    cursor
        + text[cursor..]
            .chars()
            .next()
            .map(|ch| ch.len_utf8())
            .unwrap_or(0)
}

/// Computes `[start, end)` of `text` that fits `available_width` cells while
/// keeping `cursor` visible.
pub fn window(text: &str, cursor: usize, available_width: usize) -> (usize, usize) {
    let cursor = clamp_to_char_boundary(text, cursor);
    if available_width == 0 || text.is_empty() {
        return (cursor, cursor);
    }

    let start = window_start(text, cursor, available_width);
    let end = start + truncate_to_width(&text[start..], available_width);
    (start, end.min(text.len()))
}

pub fn window_start(text: &str, cursor: usize, available_width: usize) -> usize {
    let cursor = clamp_to_char_boundary(text, cursor);
    if available_width == 0 {
        return cursor;
    }

    let prefix = &text[..cursor_cell_end(text, cursor)];
    // Reserve one cell for a cursor parked past the end of the line.
    let needed = UnicodeWidthStr::width(prefix) + usize::from(cursor >= text.len());
    if needed <= available_width {
        return 0;
    }

    let budget = available_width - usize::from(cursor >= text.len());
    let mut start = cursor;
    let mut used = 0usize;
    for (idx, ch) in prefix.char_indices().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }

    start
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

#[cfg(test)]
#[path = "../../tests/unit/core/text_window.rs"]
mod tests;
