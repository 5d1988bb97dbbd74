use super::*;
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod};

#[test]
fn line_push_merges_equal_styles() {
    let mut line = Line::new();
    line.push("ab", Style::default());
    line.push("cd", Style::default());
    line.push("", Style::default().fg(Color::Indexed(1)));
    line.push("ef", Style::default().add_mod(Mod::REVERSE));
    assert_eq!(line.spans.len(), 2);
    assert_eq!(line.to_plain(), "abcdef");
    assert_eq!(line.width(), 6);
}

#[test]
fn frame_plain_string_joins_lines_without_trailing_newline() {
    let mut frame = TextFrame::new();
    frame.push_line(Line::raw("one"));
    frame.push_line(Line::raw("three"));
    assert_eq!(frame.to_plain_string(), "one\nthree");
    assert_eq!(frame.width(), 5);
    assert_eq!(frame.height(), 2);
}

#[test]
fn zero_padding_is_identity() {
    let mut frame = TextFrame::new();
    frame.push_line(Line::raw("a"));
    frame.push_line(Line::raw("bcd"));
    let padded = frame.clone().padded(Padding::ZERO);
    assert_eq!(padded, frame);
}

#[test]
fn padding_keeps_block_rectangular() {
    let mut frame = TextFrame::new();
    frame.push_line(Line::raw("a"));
    frame.push_line(Line::raw("bcd"));
    let padded = frame.padded(Padding::new(1, 1, 0, 2));
    assert_eq!(padded.to_plain_string(), "      \n  a   \n  bcd ");
}

#[test]
fn paint_positions_spans_by_cell_width() {
    let mut line = Line::raw("你");
    line.push("x", Style::default().fg(Color::Indexed(2)));
    let mut frame = TextFrame::new();
    frame.push_line(line);
    frame.push_line(Line::raw("hidden"));

    let mut painter = Painter::new();
    frame.paint(&mut painter, Rect::new(0, 0, 10, 1));

    let texts: Vec<(Pos, String)> = painter
        .cmds()
        .iter()
        .filter_map(|cmd| match cmd {
            PaintCmd::Span { pos, text, .. } => Some((*pos, text.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            (Pos::new(0, 0), "你".to_string()),
            (Pos::new(2, 0), "x".to_string())
        ]
    );
}

#[test]
fn line_fit_clips_styled_spans_and_pads() {
    let bold = Style::default().add_mod(Mod::BOLD);
    let mut line = Line::raw("ab");
    line.push("cdef", bold);

    let clipped = line.clone().fit(3);
    assert_eq!(clipped.to_plain(), "abc");
    assert_eq!(clipped.spans[1].style, bold);

    let padded = line.fit(8);
    assert_eq!(padded.to_plain(), "abcdef  ");
    assert_eq!(padded.width(), 8);
}
