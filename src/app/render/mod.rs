//! Layout renderer: a pure function of application state and options.

pub mod tabs;
pub mod window;

use super::state::{AppState, LayoutKind};
use crate::ui::core::text::{Line, TextFrame};
use crate::ui::core::theme::{Theme, Token};

/// Immutable render configuration, passed explicitly to every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Append the last stored event error below the window.
    pub show_errors: bool,
}

pub fn render(state: &AppState, options: &RenderOptions) -> TextFrame {
    let theme = &options.theme;
    let layout = state.layout();
    let body = state.textarea.view();
    // Fall back to the text area's own width until the terminal size is known.
    let target = layout
        .pane_width(state.viewport())
        .unwrap_or(state.textarea.width() as usize + 2);

    let mut frame = match layout.kind {
        LayoutKind::TextArea => {
            let mut frame = TextFrame { lines: body };
            frame.push_line(Line::new());
            frame
        }
        LayoutKind::Window => window::render_pane(body, target, theme, true),
        LayoutKind::Tabs if state.tabs().is_empty() => {
            window::render_pane(body, target, theme, true)
        }
        LayoutKind::Tabs => {
            let slots = tabs::compute_tab_slots(state.tabs(), state.active_tab());
            let width = target.max(tabs::row_width(&slots));
            let mut frame = tabs::render_tab_row(&slots, theme, width);
            frame.append(window::render_pane(body, width, theme, false));
            frame
        }
    };

    if options.show_errors {
        if let Some(err) = &state.last_error {
            frame.push_line(Line::styled(format!("error: {err}"), theme.style(Token::ErrorFg)));
        }
    }

    frame.padded(layout.padding)
}

#[cfg(test)]
#[path = "../../../tests/unit/app/render/mod.rs"]
mod tests;
