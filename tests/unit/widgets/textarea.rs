use super::*;
use crate::core::event::BlinkTick;

fn focused() -> TextArea {
    let mut ta = TextArea::new();
    let _ = ta.focus();
    ta
}

fn type_str(ta: &mut TextArea, s: &str) {
    for ch in s.chars() {
        let _ = ta.update(&InputEvent::char(ch));
    }
}

fn press(ta: &mut TextArea, code: KeyCode) {
    let _ = ta.update(&InputEvent::key(code));
}

fn plain(lines: &[Line]) -> Vec<String> {
    lines.iter().map(Line::to_plain).collect()
}

#[test]
fn typing_inserts_at_cursor() {
    let mut ta = focused();
    type_str(&mut ta, "hello");
    press(&mut ta, KeyCode::Left);
    press(&mut ta, KeyCode::Left);
    type_str(&mut ta, "X");
    assert_eq!(ta.value(), "helXlo");
    assert_eq!(ta.cursor(), (0, 4));
}

#[test]
fn enter_splits_and_backspace_joins_lines() {
    let mut ta = focused();
    type_str(&mut ta, "abcd");
    press(&mut ta, KeyCode::Left);
    press(&mut ta, KeyCode::Left);
    press(&mut ta, KeyCode::Enter);
    assert_eq!(ta.value(), "ab\ncd");
    assert_eq!(ta.cursor(), (1, 0));
    assert_eq!(ta.line_count(), 2);

    press(&mut ta, KeyCode::Backspace);
    assert_eq!(ta.value(), "abcd");
    assert_eq!(ta.cursor(), (0, 2));
}

#[test]
fn delete_at_line_end_pulls_next_line_up() {
    let mut ta = focused();
    ta.set_value("ab\ncd");
    assert_eq!(ta.cursor(), (1, 2));
    press(&mut ta, KeyCode::Up);
    press(&mut ta, KeyCode::End);
    press(&mut ta, KeyCode::Delete);
    assert_eq!(ta.value(), "abcd");
}

#[test]
fn horizontal_movement_wraps_across_lines() {
    let mut ta = focused();
    ta.set_value("ab\ncd");
    press(&mut ta, KeyCode::Home);
    press(&mut ta, KeyCode::Left);
    assert_eq!(ta.cursor(), (0, 2));
    press(&mut ta, KeyCode::Right);
    assert_eq!(ta.cursor(), (1, 0));
}

#[test]
fn vertical_movement_clamps_column() {
    let mut ta = focused();
    ta.set_value("long line\nab");
    press(&mut ta, KeyCode::Up);
    press(&mut ta, KeyCode::End);
    press(&mut ta, KeyCode::Down);
    assert_eq!(ta.cursor(), (1, 2));
    press(&mut ta, KeyCode::Down);
    assert_eq!(ta.cursor(), (1, 2));
}

#[test]
fn grapheme_clusters_move_and_delete_as_one() {
    let mut ta = focused();
    type_str(&mut ta, "e\u{301}x");
    assert_eq!(ta.cursor(), (0, 2));
    press(&mut ta, KeyCode::Left);
    press(&mut ta, KeyCode::Backspace);
    assert_eq!(ta.value(), "x");
}

#[test]
fn char_limit_rejects_extra_input() {
    let mut ta = focused();
    ta.set_char_limit(3);
    type_str(&mut ta, "abcdef");
    press(&mut ta, KeyCode::Enter);
    assert_eq!(ta.value(), "abc");
}

#[test]
fn unfocused_text_area_ignores_keys() {
    let mut ta = TextArea::new();
    assert!(ta.update(&InputEvent::char('a')).is_none());
    assert!(ta.is_empty());
}

#[test]
fn keys_restart_blink_and_ticks_toggle_cursor() {
    let mut ta = focused();
    let Some(Command::Blink(tick)) = ta.update(&InputEvent::char('a')) else {
        panic!("key should schedule a blink");
    };
    assert!(ta.cursor_visible());

    let next = ta.update(&InputEvent::Tick(tick));
    assert!(next.is_some());
    assert!(!ta.cursor_visible());

    let stale = BlinkTick { id: tick.id.wrapping_sub(1), after: tick.after };
    assert!(ta.update(&InputEvent::Tick(stale)).is_none());
}

#[test]
fn view_has_fixed_shape() {
    let mut ta = TextArea::new();
    ta.set_width(12);
    ta.set_height(3);
    ta.set_value("one\ntwo");
    let lines = ta.view();
    assert_eq!(
        plain(&lines),
        vec!["┃   1 one   ", "┃   2 two   ", "┃           "]
    );
    assert!(lines.iter().all(|l| l.width() == 12));
}

#[test]
fn view_without_line_numbers_marks_cursor_cell() {
    let mut ta = focused();
    ta.set_show_line_numbers(false);
    ta.set_width(6);
    ta.set_height(1);
    type_str(&mut ta, "ab");
    let lines = ta.view();
    assert_eq!(plain(&lines), vec!["┃ ab  "]);
    let cursor = lines[0]
        .spans
        .iter()
        .find(|s| s.style.mods.contains(Mod::REVERSE))
        .expect("cursor cell");
    assert_eq!(cursor.text, " ");
}

#[test]
fn view_scrolls_horizontally_to_follow_cursor() {
    let mut ta = focused();
    ta.set_show_line_numbers(false);
    ta.set_width(6);
    ta.set_height(1);
    type_str(&mut ta, "abcdef");
    assert_eq!(plain(&ta.view()), vec!["┃ def "]);
}

#[test]
fn view_scrolls_vertically_to_follow_cursor() {
    let mut ta = TextArea::new();
    ta.set_show_line_numbers(false);
    ta.set_width(8);
    ta.set_height(2);
    ta.set_value("a\nb\nc\nd");
    assert_eq!(plain(&ta.view()), vec!["┃ c     ", "┃ d     "]);
}

#[test]
fn placeholder_shows_only_when_empty() {
    let mut ta = TextArea::new();
    ta.set_show_line_numbers(false);
    ta.set_width(10);
    ta.set_height(1);
    ta.set_placeholder("Write...");
    assert_eq!(plain(&ta.view()), vec!["┃ Write..."]);

    let _ = ta.focus();
    type_str(&mut ta, "x");
    assert_eq!(plain(&ta.view()), vec!["┃ x       "]);
}
