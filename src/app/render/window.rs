//! Bordered content pane.

use crate::ui::core::text::{Line, TextFrame};
use crate::ui::core::theme::Theme;

/// Wraps `body` in the window border, `width` cells wide including borders.
/// Without `top` the first row of `body` sits right under whatever the caller
/// places above (the tab row).
pub fn render_pane(body: Vec<Line>, width: usize, theme: &Theme, top: bool) -> TextFrame {
    let border = theme.window_border;
    let style = theme.border_style();
    let inner = width.saturating_sub(2);
    let hline = |ch: char| ch.to_string().repeat(inner);

    let mut frame = TextFrame::new();
    if top {
        frame.push_line(Line::styled(
            format!("{}{}{}", border.top_left, hline(border.top), border.top_right),
            style,
        ));
    }
    for row in body {
        let mut line = Line::styled(border.left.to_string(), style);
        line.extend(row.fit(inner));
        line.push(border.right.to_string(), style);
        frame.push_line(line);
    }
    frame.push_line(Line::styled(
        format!(
            "{}{}{}",
            border.bottom_left,
            hline(border.bottom),
            border.bottom_right
        ),
        style,
    ));
    frame
}

#[cfg(test)]
#[path = "../../../tests/unit/app/render/window.rs"]
mod tests;
