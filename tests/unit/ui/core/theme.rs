use super::*;

#[test]
fn default_tab_borders_open_the_active_tab() {
    let theme = Theme::default();
    assert_eq!(theme.active_tab_border.bottom, ' ');
    assert_eq!(theme.active_tab_border.bottom_left, '┘');
    assert_eq!(theme.active_tab_border.bottom_right, '└');
    assert_eq!(theme.inactive_tab_border.bottom, '─');
    assert_eq!(theme.inactive_tab_border.top_left, '╭');
}

#[test]
fn token_lookup_matches_fields() {
    let theme = Theme::default();
    assert_eq!(theme.color(Token::Highlight), theme.highlight);
    assert_eq!(theme.color(Token::ErrorFg), theme.error_fg);
    assert_eq!(theme.border_style().fg, Some(theme.highlight));
}
