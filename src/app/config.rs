//! Start-up configuration.
//!
//! Precedence: command line > config file > defaults.

use super::render::RenderOptions;
use super::state::{AppState, Layout, LayoutKind};
use crate::error::{Error, Result};
use crate::ui::core::style::Color;
use crate::ui::core::text::Padding;
use crate::ui::core::theme::Theme;
use crate::widgets::{TextArea, TextAreaStyles};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TABS: [&str; 2] = ["Journal", "Inbox"];

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tabpad")]
#[command(version)]
#[command(about = "A text area inside a tabbed terminal window", long_about = None)]
pub struct CliArgs {
    /// Screen layout
    #[arg(long, value_enum, value_name = "LAYOUT")]
    pub layout: Option<LayoutKind>,

    /// Tab label; repeat for more tabs
    #[arg(long = "tab", value_name = "LABEL")]
    pub tabs: Vec<String>,

    /// Index of the active tab
    #[arg(long, value_name = "N")]
    pub active: Option<usize>,

    /// Text shown while the text area is empty
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Hide line numbers
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Maximum number of characters, 0 for unlimited
    #[arg(long, value_name = "N")]
    pub char_limit: Option<usize>,

    /// Keep the cursor steady
    #[arg(long)]
    pub no_blink: bool,

    /// Show the last input error below the window
    #[arg(long)]
    pub show_errors: bool,

    /// Path to a JSON config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub layout: LayoutKind,
    pub tabs: Vec<String>,
    pub active_tab: usize,
    pub placeholder: String,
    pub line_numbers: bool,
    pub char_limit: usize,
    pub cursor_blink: bool,
    pub show_errors: bool,
    pub padding: Padding,
    /// `#rrggbb` override for borders and the prompt.
    pub highlight: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutKind::default(),
            tabs: DEFAULT_TABS.iter().map(|s| s.to_string()).collect(),
            active_tab: 0,
            placeholder: String::new(),
            line_numbers: true,
            char_limit: 0,
            cursor_blink: true,
            show_errors: false,
            padding: Padding::ZERO,
            highlight: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_with_args(args: &CliArgs) -> Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(layout) = args.layout {
            self.layout = layout;
        }
        if !args.tabs.is_empty() {
            self.tabs = args.tabs.clone();
        }
        if let Some(active) = args.active {
            self.active_tab = active;
        }
        if let Some(placeholder) = &args.placeholder {
            self.placeholder = placeholder.clone();
        }
        if args.no_line_numbers {
            self.line_numbers = false;
        }
        if let Some(limit) = args.char_limit {
            self.char_limit = limit;
        }
        if args.no_blink {
            self.cursor_blink = false;
        }
        if args.show_errors {
            self.show_errors = true;
        }
    }

    pub fn theme(&self) -> Result<Theme> {
        let mut theme = Theme::default();
        if let Some(hex) = &self.highlight {
            let color = Color::from_hex(hex).ok_or_else(|| Error::InvalidColor(hex.clone()))?;
            theme.highlight = color;
            theme.prompt_fg = color;
        }
        Ok(theme)
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        Ok(RenderOptions {
            theme: self.theme()?,
            show_errors: self.show_errors,
        })
    }

    pub fn build_state(&self, theme: &Theme) -> AppState {
        let mut textarea = TextArea::new();
        textarea.set_placeholder(self.placeholder.clone());
        textarea.set_show_line_numbers(self.line_numbers);
        textarea.set_char_limit(self.char_limit);
        textarea.set_blink(self.cursor_blink);
        textarea.set_styles(TextAreaStyles::from_theme(theme));

        let mut state = AppState::new(
            self.tabs.clone(),
            textarea,
            Layout::new(self.layout, self.padding).with_error_row(self.show_errors),
        );
        state.select_tab(self.active_tab);
        state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/config.rs"]
mod tests;
