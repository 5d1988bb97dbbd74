use crate::core::event::EventError;
use crate::core::Command;
use crate::ui::core::geom::Size;
use crate::ui::core::text::Padding;
use crate::widgets::TextArea;
use serde::Deserialize;

/// Rows taken by a tab label: top border, label, bottom border.
pub const TAB_ROW_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// The bare text area followed by a newline.
    #[value(name = "textarea")]
    TextArea,
    /// Text area inside a bordered window.
    Window,
    /// Tab row merged into a topless window.
    #[default]
    Tabs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    pub kind: LayoutKind,
    pub padding: Padding,
    /// Keeps the bottom row free for the `error: ...` line.
    pub error_row: bool,
}

impl Layout {
    pub fn new(kind: LayoutKind, padding: Padding) -> Self {
        Self {
            kind,
            padding,
            error_row: false,
        }
    }

    pub fn with_error_row(mut self, reserve: bool) -> Self {
        self.error_row = reserve;
        self
    }

    /// Cells available to the text area for a terminal of `viewport` size.
    pub fn content_size(&self, viewport: Size, tab_count: usize) -> Size {
        let width = viewport.width.saturating_sub(self.padding.horizontal());
        let height = viewport.height.saturating_sub(self.padding.vertical());
        let (chrome_w, chrome_h) = match self.kind {
            // The trailing newline takes the last row.
            LayoutKind::TextArea => (0, 1),
            LayoutKind::Window => (2, 2),
            LayoutKind::Tabs if tab_count == 0 => (2, 2),
            LayoutKind::Tabs => (2, TAB_ROW_HEIGHT + 1),
        };
        let chrome_h = chrome_h + u16::from(self.error_row);
        Size::new(
            width.saturating_sub(chrome_w).max(1),
            height.saturating_sub(chrome_h).max(1),
        )
    }

    /// Pane width when rendering; `None` until the terminal size is known.
    pub fn pane_width(&self, viewport: Option<Size>) -> Option<usize> {
        viewport.map(|v| v.width.saturating_sub(self.padding.horizontal()) as usize)
    }
}

/// Everything the dispatcher mutates and the renderer reads.
#[derive(Debug, Clone)]
pub struct AppState {
    tabs: Vec<String>,
    active_tab: usize,
    pub textarea: TextArea,
    pub last_error: Option<EventError>,
    viewport: Option<Size>,
    layout: Layout,
}

impl AppState {
    pub fn new(tabs: Vec<String>, textarea: TextArea, layout: Layout) -> Self {
        Self {
            tabs,
            active_tab: 0,
            textarea,
            last_error: None,
            viewport: None,
            layout,
        }
    }

    /// Focuses the text area; the returned command starts cursor blinking.
    pub fn start(&mut self) -> Vec<Command> {
        self.textarea.focus().into_iter().collect()
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Selects a tab, clamping to the last one. Ignored without tabs.
    pub fn select_tab(&mut self, index: usize) {
        self.active_tab = index.min(self.tabs.len().saturating_sub(1));
    }

    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Records the terminal size and resizes the text area to fit the layout.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = Some(viewport);
        let content = self.layout.content_size(viewport, self.tabs.len());
        self.textarea.set_width(content.width);
        self.textarea.set_height(content.height);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/state.rs"]
mod tests;
