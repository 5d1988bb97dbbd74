//! Multi-line text input.
//!
//! Owns the text buffer, the cursor position, focus and blink state. The
//! application never touches the buffer directly: it forwards events through
//! `update` and draws whatever `view` returns.

use super::cursor::BlinkCursor;
use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crate::core::text_window::window;
use crate::core::Command;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::text::Line;
use crate::ui::core::theme::{Theme, Token};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_WIDTH: u16 = 40;
pub const DEFAULT_HEIGHT: u16 = 6;
const PROMPT: &str = "┃ ";
const LINE_NUMBER_WIDTH: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAreaStyles {
    pub prompt: Style,
    pub line_number: Style,
    pub cursor_line_number: Style,
    pub text: Style,
    pub placeholder: Style,
}

impl TextAreaStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            prompt: theme.style(Token::PromptFg),
            line_number: theme.style(Token::LineNumberFg),
            cursor_line_number: theme.style(Token::CursorLineNumberFg),
            text: Style::default(),
            placeholder: theme.style(Token::PlaceholderFg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextArea {
    rope: Rope,
    /// (row, grapheme column)
    cursor: (usize, usize),
    focused: bool,
    blink: BlinkCursor,
    width: u16,
    height: u16,
    line_offset: usize,
    placeholder: String,
    show_line_numbers: bool,
    char_limit: usize,
    styles: TextAreaStyles,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
            focused: false,
            blink: BlinkCursor::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            line_offset: 0,
            placeholder: String::new(),
            show_line_numbers: true,
            char_limit: 0,
            styles: TextAreaStyles::default(),
        }
    }

    // ==================== configuration ====================

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
        self.follow_cursor();
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_show_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    /// Maximum number of characters (newlines included); 0 disables the limit.
    pub fn set_char_limit(&mut self, limit: usize) {
        self.char_limit = limit;
    }

    pub fn set_blink(&mut self, blink: bool) {
        self.blink.set_blink(blink);
    }

    pub fn set_styles(&mut self, styles: TextAreaStyles) {
        self.styles = styles;
    }

    // ==================== focus ====================

    pub fn focus(&mut self) -> Option<Command> {
        self.focused = true;
        self.blink.restart()
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn cursor_visible(&self) -> bool {
        self.focused && self.blink.visible()
    }

    // ==================== content ====================

    pub fn value(&self) -> String {
        self.rope.to_string()
    }

    pub fn set_value(&mut self, text: &str) {
        self.rope = Rope::new();
        self.cursor = (0, 0);
        self.line_offset = 0;
        self.insert_str(text);
    }

    /// Inserts `text` at the cursor, honoring the character limit.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for ch in normalized.chars() {
            if ch == '\n' {
                self.insert_newline();
            } else if !ch.is_control() {
                self.insert_char(ch);
            }
        }
        self.follow_cursor();
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let mut line = self.rope.line(row).to_string();
        if line.ends_with('\n') {
            line.pop();
        }
        Some(line)
    }

    // ==================== update ====================

    /// Applies an event. An unfocused text area ignores everything.
    pub fn update(&mut self, event: &InputEvent) -> Option<Command> {
        if !self.focused {
            return None;
        }
        match event {
            InputEvent::Key(key) if key.is_press() => {
                self.handle_key(key);
                self.follow_cursor();
                self.blink.restart()
            }
            InputEvent::Tick(tick) => self.blink.on_tick(*tick),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('a') if ctrl => self.cursor.1 = 0,
            KeyCode::Char('e') if ctrl => self.cursor.1 = self.line_len(self.cursor.0),
            KeyCode::Char(ch) if !ctrl && !alt => self.insert_char(ch),
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_vertical(-1),
            KeyCode::Down => self.move_vertical(1),
            KeyCode::Home => self.cursor.1 = 0,
            KeyCode::End => self.cursor.1 = self.line_len(self.cursor.0),
            KeyCode::PageUp => self.move_vertical(-(self.height.max(1) as isize)),
            KeyCode::PageDown => self.move_vertical(self.height.max(1) as isize),
            _ => {}
        }
    }

    fn at_limit(&self) -> bool {
        self.char_limit > 0 && self.rope.len_chars() >= self.char_limit
    }

    fn insert_char(&mut self, ch: char) {
        if self.at_limit() {
            return;
        }
        let (row, col) = self.cursor;
        let offset = self.char_offset(row, col);
        self.rope.insert_char(offset, ch);
        // A combining mark joins the previous grapheme instead of adding one.
        self.cursor.1 = (col + 1).min(self.line_len(row));
    }

    fn insert_newline(&mut self) {
        if self.at_limit() {
            return;
        }
        let (row, col) = self.cursor;
        let offset = self.char_offset(row, col);
        self.rope.insert_char(offset, '\n');
        self.cursor = (row + 1, 0);
    }

    fn delete_backward(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            let start = self.char_offset(row, col - 1);
            let end = self.char_offset(row, col);
            self.rope.remove(start..end);
            self.cursor.1 = col - 1;
        } else if row > 0 {
            let prev_len = self.line_len(row - 1);
            let newline = self.rope.line_to_char(row) - 1;
            self.rope.remove(newline..newline + 1);
            self.cursor = (row - 1, prev_len);
        }
    }

    fn delete_forward(&mut self) {
        let (row, col) = self.cursor;
        if col < self.line_len(row) {
            let start = self.char_offset(row, col);
            let end = self.char_offset(row, col + 1);
            self.rope.remove(start..end);
        } else if row + 1 < self.rope.len_lines() {
            let newline = self.rope.line_to_char(row + 1) - 1;
            self.rope.remove(newline..newline + 1);
        }
    }

    fn move_left(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            self.cursor.1 = col - 1;
        } else if row > 0 {
            self.cursor = (row - 1, self.line_len(row - 1));
        }
    }

    fn move_right(&mut self) {
        let (row, col) = self.cursor;
        if col < self.line_len(row) {
            self.cursor.1 = col + 1;
        } else if row + 1 < self.rope.len_lines() {
            self.cursor = (row + 1, 0);
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let last = self.rope.len_lines().saturating_sub(1);
        let row = self.cursor.0.saturating_add_signed(delta).min(last);
        self.cursor = (row, self.cursor.1.min(self.line_len(row)));
    }

    fn line_len(&self, row: usize) -> usize {
        self.line(row)
            .map(|line| line.graphemes(true).count())
            .unwrap_or(0)
    }

    fn char_offset(&self, row: usize, col: usize) -> usize {
        let Some(line) = self.line(row) else {
            return self.rope.len_chars();
        };
        let within: usize = line
            .graphemes(true)
            .take(col)
            .map(|g| g.chars().count())
            .sum();
        self.rope.line_to_char(row) + within
    }

    fn follow_cursor(&mut self) {
        self.line_offset = self.visible_offset();
    }

    /// First buffer row shown, keeping the cursor row inside the viewport.
    fn visible_offset(&self) -> usize {
        let height = self.height.max(1) as usize;
        let row = self.cursor.0;
        let max_offset = self.rope.len_lines().saturating_sub(height);
        let mut offset = self.line_offset.min(max_offset);
        if row < offset {
            offset = row;
        } else if row >= offset + height {
            offset = row + 1 - height;
        }
        offset
    }

    // ==================== view ====================

    /// Renders exactly `height` lines, each `width` cells wide.
    pub fn view(&self) -> Vec<Line> {
        let width = self.width as usize;
        let gutter = UnicodeWidthStr::width(PROMPT)
            + if self.show_line_numbers {
                LINE_NUMBER_WIDTH
            } else {
                0
            };
        let content_width = width.saturating_sub(gutter);
        let offset = self.visible_offset();
        let show_cursor = self.cursor_visible();

        let mut lines = Vec::with_capacity(self.height as usize);
        for row in offset..offset + self.height as usize {
            let mut line = Line::new();
            line.push(PROMPT, self.styles.prompt);

            let exists = row < self.rope.len_lines();
            if self.show_line_numbers {
                if exists {
                    let style = if row == self.cursor.0 {
                        self.styles.cursor_line_number
                    } else {
                        self.styles.line_number
                    };
                    line.push(format!("{:>3} ", row + 1), style);
                } else {
                    line.push(" ".repeat(LINE_NUMBER_WIDTH), Style::default());
                }
            }

            if content_width > 0 && exists {
                let content = if row == 0 && self.is_empty() && !self.placeholder.is_empty() {
                    self.placeholder_line(content_width, show_cursor)
                } else if row == self.cursor.0 {
                    self.cursor_line(row, content_width, show_cursor)
                } else {
                    let text = self.line(row).unwrap_or_default();
                    Line::styled(text, self.styles.text)
                };
                line.extend(content.fit(content_width));
            }

            lines.push(line.fit(width));
        }
        lines
    }

    fn placeholder_line(&self, width: usize, show_cursor: bool) -> Line {
        let mut line = Line::new();
        let mut graphemes = self.placeholder.graphemes(true);
        if show_cursor {
            if let Some(first) = graphemes.next() {
                line.push(first, self.styles.placeholder.add_mod(Mod::REVERSE));
            }
        }
        let rest: String = graphemes.collect();
        line.push(rest, self.styles.placeholder);
        line.fit(width)
    }

    fn cursor_line(&self, row: usize, width: usize, show_cursor: bool) -> Line {
        let text = self.line(row).unwrap_or_default();
        let cursor_byte: usize = text
            .graphemes(true)
            .take(self.cursor.1)
            .map(str::len)
            .sum();
        let (start, end) = window(&text, cursor_byte, width);
        let start = start.min(cursor_byte);

        let mut line = Line::new();
        if !show_cursor {
            line.push(&text[start..end.max(start)], self.styles.text);
            return line;
        }

        let under = text[cursor_byte..].graphemes(true).next().unwrap_or(" ");
        let after = (cursor_byte + under.len()).min(text.len());
        line.push(&text[start..cursor_byte], self.styles.text);
        line.push(under, self.styles.text.add_mod(Mod::REVERSE));
        if after < end {
            line.push(&text[after..end], self.styles.text);
        }
        line
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/textarea.rs"]
mod tests;
