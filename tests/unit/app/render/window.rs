use super::*;

fn rows(frame: &TextFrame) -> Vec<String> {
    frame.lines.iter().map(Line::to_plain).collect()
}

#[test]
fn pane_with_top_border() {
    let frame = render_pane(vec![Line::raw("hi")], 6, &Theme::default(), true);
    assert_eq!(rows(&frame), vec!["┌────┐", "│hi  │", "└────┘"]);
}

#[test]
fn pane_without_top_border_clips_body() {
    let frame = render_pane(vec![Line::raw("toolong")], 5, &Theme::default(), false);
    assert_eq!(rows(&frame), vec!["│too│", "└───┘"]);
}

#[test]
fn pane_borders_use_highlight_color() {
    let theme = Theme::default();
    let frame = render_pane(Vec::new(), 4, &theme, true);
    assert_eq!(frame.lines[0].spans[0].style.fg, Some(theme.highlight));
}
