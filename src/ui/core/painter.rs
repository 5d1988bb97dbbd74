//! Paint commands recorded from text frames and replayed by a backend.

use super::geom::{Pos, Rect};
use super::style::Style;
use super::text::Line;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Reset every cell of the rect to a blank with the default style.
    Clear(Rect),
    /// Text starting at `pos`. Graphemes that do not fit entirely inside
    /// `clip` are dropped.
    Span {
        pos: Pos,
        text: String,
        style: Style,
        clip: Rect,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn blank(&mut self, rect: Rect) {
        self.cmds.push(PaintCmd::Clear(rect));
    }

    pub fn span(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.cmds.push(PaintCmd::Span {
            pos,
            text: text.into(),
            style,
            clip,
        });
    }

    /// Records the spans of `line` left to right, each placed after the
    /// display width of the previous ones.
    pub fn line(&mut self, pos: Pos, line: &Line, clip: Rect) {
        let mut x = pos.x;
        for span in &line.spans {
            if x >= clip.right() {
                break;
            }
            self.span(Pos::new(x, pos.y), span.text.as_str(), span.style, clip);
            let width = u16::try_from(span.width()).unwrap_or(u16::MAX);
            x = x.saturating_add(width);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
