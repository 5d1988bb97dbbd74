//! tabpad - a text area inside a tabbed terminal window.
//!
//! Modules:
//! - core: events and commands
//! - widgets: the text area and its blinking cursor
//! - ui: styled text frames, painter and backends
//! - app: state, dispatcher, renderer and the program loop
//! - tui: crossterm session (feature `tui`)

pub mod app;
pub mod core;
pub mod error;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod widgets;

pub use error::{Error, Result};
