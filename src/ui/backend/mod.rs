//! Rendering backends.
//!
//! Paint commands are replayed onto a `Surface`, a grid of cells. The
//! terminal backend wraps a ratatui buffer, the test backend a plain vector,
//! and both share the clipping rules below.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

pub trait Surface {
    fn area(&self) -> Rect;

    /// Writes one grapheme into the cell at (x, y). Coordinates are always
    /// inside `area`.
    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);
}

/// Replays `cmds` onto `surface`, clipped to the surface area.
pub fn replay<S: Surface + ?Sized>(surface: &mut S, cmds: &[PaintCmd]) {
    let bounds = surface.area();
    for cmd in cmds {
        match cmd {
            PaintCmd::Clear(rect) => {
                let rect = rect.intersect(bounds);
                for y in rect.y..rect.bottom() {
                    for x in rect.x..rect.right() {
                        surface.put(x, y, " ", Style::default());
                    }
                }
            }
            PaintCmd::Span {
                pos,
                text,
                style,
                clip,
            } => put_span(surface, *pos, text, *style, clip.intersect(bounds)),
        }
    }
}

// A wide glyph takes its first cell; the cells it covers get an empty symbol.
// Glyphs that would straddle the clip edge are not drawn.
fn put_span<S: Surface + ?Sized>(surface: &mut S, pos: Pos, text: &str, style: Style, clip: Rect) {
    if !clip.contains(Pos::new(clip.x, pos.y)) {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        let end = x.saturating_add(w);
        if end > clip.right() {
            break;
        }
        if x >= clip.x {
            surface.put(x, pos.y, g, style);
            for cont in x + 1..end {
                surface.put(cont, pos.y, "", style);
            }
        }
        x = end;
    }
}

// The concrete terminal backend lives in `ratatui.rs`; the module name stays
// generic so callers never mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
