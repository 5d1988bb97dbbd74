//! Styled text frames.
//!
//! A `TextFrame` is what the renderer produces: rows of styled spans laid out
//! left to right. It can be flattened to a plain string or painted into a
//! backend area.

use super::geom::{Pos, Rect};
use super::painter::Painter;
use super::style::Style;
use crate::core::text_window::truncate_to_width;
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::raw(text)],
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(text, style)],
        }
    }

    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        // Merge with the previous span when the style matches.
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.text.push_str(&text);
                return;
            }
        }
        self.spans.push(Span::styled(text, style));
    }

    pub fn extend(&mut self, other: Line) {
        for span in other.spans {
            self.push(span.text, span.style);
        }
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Clips the line to `width` cells and pads it with blanks up to `width`.
    pub fn fit(self, width: usize) -> Line {
        let mut out = Line::new();
        let mut used = 0usize;
        for span in self.spans {
            if used >= width {
                break;
            }
            let end = truncate_to_width(&span.text, width - used);
            let text = &span.text[..end];
            used += UnicodeWidthStr::width(text);
            out.push(text, span.style);
        }
        out.push(" ".repeat(width - used), Style::default());
        out
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFrame {
    pub lines: Vec<Line>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn append(&mut self, other: TextFrame) {
        self.lines.extend(other.lines);
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }

    /// Lines joined with `\n`; no trailing newline.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.to_plain());
        }
        out
    }

    /// Surrounds the frame with blank cells. Every row is padded to the same
    /// width so the block stays rectangular.
    pub fn padded(self, padding: Padding) -> TextFrame {
        if padding == Padding::ZERO {
            return self;
        }

        let inner = self.width();
        let total = inner + padding.horizontal() as usize;
        let blank = || Line::raw(" ".repeat(total));

        let mut out = TextFrame::new();
        for _ in 0..padding.top {
            out.push_line(blank());
        }
        for line in self.lines {
            let fill = inner - line.width() + padding.right as usize;
            let mut row = Line::raw(" ".repeat(padding.left as usize));
            row.extend(line);
            row.push(" ".repeat(fill), Style::default());
            out.push_line(row);
        }
        for _ in 0..padding.bottom {
            out.push_line(blank());
        }
        out
    }

    /// Emits paint commands for the frame, clipped to `area`.
    pub fn paint(&self, painter: &mut Painter, area: Rect) {
        painter.blank(area);
        for (row, line) in self.lines.iter().take(area.h as usize).enumerate() {
            painter.line(Pos::new(area.x, area.y + row as u16), line, area);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
