//! Tab row layout.
//!
//! Each tab is a three-row box around its label. The active tab's bottom edge
//! is open so it flows into the window below; the outermost bottom corners
//! are replaced with junction glyphs so the row lines up with the window's
//! side borders.

use crate::ui::core::style::Style;
use crate::ui::core::text::{Line, TextFrame};
use crate::ui::core::theme::{BorderSet, Theme, Token};
use unicode_width::UnicodeWidthStr;

const LABEL_PADDING: usize = 1;

/// Bottom corner override for the first and last tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    ConnectedLeft,
    DisconnectedLeft,
    ConnectedRight,
    DisconnectedRight,
}

impl Corner {
    pub fn glyph(self) -> char {
        match self {
            Corner::ConnectedLeft | Corner::ConnectedRight => '│',
            Corner::DisconnectedLeft => '├',
            Corner::DisconnectedRight => '┤',
        }
    }

    /// Glyph used when the bottom line continues to the right of the tab.
    pub fn continued_glyph(self) -> char {
        match self {
            Corner::ConnectedRight => '└',
            Corner::DisconnectedRight => '┴',
            other => other.glyph(),
        }
    }
}

/// (isFirst, isActive) policy for the left bottom corner.
pub fn left_corner(is_first: bool, is_active: bool) -> Option<Corner> {
    match (is_first, is_active) {
        (true, true) => Some(Corner::ConnectedLeft),
        (true, false) => Some(Corner::DisconnectedLeft),
        (false, _) => None,
    }
}

/// (isLast, isActive) policy for the right bottom corner.
pub fn right_corner(is_last: bool, is_active: bool) -> Option<Corner> {
    match (is_last, is_active) {
        (true, true) => Some(Corner::ConnectedRight),
        (true, false) => Some(Corner::DisconnectedRight),
        (false, _) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSlot<'a> {
    pub index: usize,
    pub label: &'a str,
    pub active: bool,
    pub left: Option<Corner>,
    pub right: Option<Corner>,
}

impl TabSlot<'_> {
    pub fn label_width(&self) -> usize {
        UnicodeWidthStr::width(self.label)
    }

    /// Total cells including borders and padding.
    pub fn width(&self) -> usize {
        self.label_width() + 2 * LABEL_PADDING + 2
    }
}

pub fn compute_tab_slots(tabs: &[String], active: usize) -> Vec<TabSlot<'_>> {
    let last = tabs.len().saturating_sub(1);
    tabs.iter()
        .enumerate()
        .map(|(index, label)| {
            let is_active = index == active;
            TabSlot {
                index,
                label: label.as_str(),
                active: is_active,
                left: left_corner(index == 0, is_active),
                right: right_corner(index == last, is_active),
            }
        })
        .collect()
}

pub fn row_width(slots: &[TabSlot<'_>]) -> usize {
    slots.iter().map(TabSlot::width).sum()
}

/// Renders the tab row. When `width` exceeds the tabs, the bottom line is
/// continued to `width` and closed with a corner so it can cap a window of
/// that width.
pub fn render_tab_row(slots: &[TabSlot<'_>], theme: &Theme, width: usize) -> TextFrame {
    let border_style = theme.border_style();
    let mut top = Line::new();
    let mut middle = Line::new();
    let mut bottom = Line::new();

    let gap = width.saturating_sub(row_width(slots));
    let last = slots.len().saturating_sub(1);

    for (i, slot) in slots.iter().enumerate() {
        let border: BorderSet = if slot.active {
            theme.active_tab_border
        } else {
            theme.inactive_tab_border
        };
        let inner = slot.label_width() + 2 * LABEL_PADDING;
        let label_style = if slot.active {
            theme.active_tab_style()
        } else {
            theme.style(Token::InactiveTabFg)
        };

        top.push(
            format!(
                "{}{}{}",
                border.top_left,
                border.top.to_string().repeat(inner),
                border.top_right
            ),
            border_style,
        );

        middle.push(border.left.to_string(), border_style);
        middle.push(" ".repeat(LABEL_PADDING), label_style);
        middle.push(slot.label, label_style);
        middle.push(" ".repeat(LABEL_PADDING), label_style);
        middle.push(border.right.to_string(), border_style);

        let left = slot.left.map(Corner::glyph).unwrap_or(border.bottom_left);
        let right = match slot.right {
            Some(corner) if gap > 0 && i == last => corner.continued_glyph(),
            Some(corner) => corner.glyph(),
            None => border.bottom_right,
        };
        bottom.push(
            format!(
                "{}{}{}",
                left,
                border.bottom.to_string().repeat(inner),
                right
            ),
            border_style,
        );
    }

    if gap > 0 && !slots.is_empty() {
        let window = theme.window_border;
        top.push(" ".repeat(gap), Style::default());
        middle.push(" ".repeat(gap), Style::default());
        bottom.push(
            format!("{}{}", window.top.to_string().repeat(gap - 1), window.top_right),
            border_style,
        );
    }

    TextFrame {
        lines: vec![top, middle, bottom],
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/render/tabs.rs"]
mod tests;
