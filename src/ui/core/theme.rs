use crate::ui::core::style::{Color, Mod, Style};

/// Semantic theme tokens for the UI layer.
///
/// This keeps the render code independent from concrete colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Highlight,
    ActiveTabFg,
    InactiveTabFg,
    PromptFg,
    LineNumberFg,
    CursorLineNumberFg,
    PlaceholderFg,
    ErrorFg,
}

/// The eight glyphs of a box border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top: char,
    pub top_right: char,
    pub left: char,
    pub right: char,
    pub bottom_left: char,
    pub bottom: char,
    pub bottom_right: char,
}

impl BorderSet {
    pub const NORMAL: BorderSet = BorderSet {
        top_left: '┌',
        top: '─',
        top_right: '┐',
        left: '│',
        right: '│',
        bottom_left: '└',
        bottom: '─',
        bottom_right: '┘',
    };

    pub const ROUNDED: BorderSet = BorderSet {
        top_left: '╭',
        top: '─',
        top_right: '╮',
        left: '│',
        right: '│',
        bottom_left: '╰',
        bottom: '─',
        bottom_right: '╯',
    };

    pub const fn with_bottom(self, left: char, middle: char, right: char) -> Self {
        BorderSet {
            bottom_left: left,
            bottom: middle,
            bottom_right: right,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub highlight: Color,
    pub active_tab_fg: Color,
    pub inactive_tab_fg: Color,
    pub prompt_fg: Color,
    pub line_number_fg: Color,
    pub cursor_line_number_fg: Color,
    pub placeholder_fg: Color,
    pub error_fg: Color,
    /// Bottom edge is open so the tab flows into the window.
    pub active_tab_border: BorderSet,
    pub inactive_tab_border: BorderSet,
    pub window_border: BorderSet,
}

impl Theme {
    pub fn color(&self, token: Token) -> Color {
        match token {
            Token::Highlight => self.highlight,
            Token::ActiveTabFg => self.active_tab_fg,
            Token::InactiveTabFg => self.inactive_tab_fg,
            Token::PromptFg => self.prompt_fg,
            Token::LineNumberFg => self.line_number_fg,
            Token::CursorLineNumberFg => self.cursor_line_number_fg,
            Token::PlaceholderFg => self.placeholder_fg,
            Token::ErrorFg => self.error_fg,
        }
    }

    pub fn style(&self, token: Token) -> Style {
        Style::default().fg(self.color(token))
    }

    pub fn border_style(&self) -> Style {
        self.style(Token::Highlight)
    }

    pub fn active_tab_style(&self) -> Style {
        self.style(Token::ActiveTabFg).add_mod(Mod::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: Color::Rgb(0x7d, 0x56, 0xf4),
            active_tab_fg: Color::Indexed(15),          // White
            inactive_tab_fg: Color::Indexed(8),         // DarkGray
            prompt_fg: Color::Rgb(0x7d, 0x56, 0xf4),
            line_number_fg: Color::Indexed(8),          // DarkGray
            cursor_line_number_fg: Color::Indexed(7),   // Gray
            placeholder_fg: Color::Indexed(8),          // DarkGray
            error_fg: Color::Indexed(1),                // Red
            active_tab_border: BorderSet::ROUNDED.with_bottom('┘', ' ', '└'),
            inactive_tab_border: BorderSet::ROUNDED.with_bottom('┴', '─', '┴'),
            window_border: BorderSet::NORMAL,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme.rs"]
mod tests;
