use crate::ui::backend::{replay, Backend, Surface};
use crate::ui::core::geom::{Rect, Size};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use std::io;

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect::new(r.x, r.y, r.w, r.h)
    }
}

/// Owns the ratatui terminal so the rest of the crate never names its types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
        })
    }

    pub fn size(&self) -> io::Result<Size> {
        let size = self.terminal.size()?;
        Ok(Size::new(size.width, size.height))
    }

    /// Runs one ratatui draw pass; `f` receives the backend and the full
    /// terminal area.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            f(&mut FrameBackend { frame }, area);
        })?;
        Ok(())
    }
}

struct FrameBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl Backend for FrameBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(Replay { cmds }, area.into());
    }
}

struct Replay<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for Replay<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        replay(&mut BufferSurface { buf }, self.cmds);
    }
}

struct BufferSurface<'a> {
    buf: &'a mut Buffer,
}

impl Surface for BufferSurface<'_> {
    fn area(&self) -> Rect {
        self.buf.area.into()
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(to_ratatui_style(style));
        }
    }
}

fn to_ratatui_style(style: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = style.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if style.mods.contains(Mod::BOLD) {
        out = out.add_modifier(RModifier::BOLD);
    }
    if style.mods.contains(Mod::REVERSE) {
        out = out.add_modifier(RModifier::REVERSED);
    }
    out
}

fn to_ratatui_color(color: Color) -> RColor {
    match color {
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

// Clipping and wide-glyph handling are covered through the headless backend in `test.rs`.
