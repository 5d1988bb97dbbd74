//! Core types shared by the dispatcher, the widgets and the terminal layer:
//! - event: closed set of input events the program reacts to
//! - command: follow-up work returned by updates
//! - text_window: width-aware string clipping

pub mod command;
pub mod event;
pub mod text_window;

pub use command::Command;
pub use event::{BlinkTick, EventError, InputEvent, KeyCode, KeyEvent, KeyModifiers};
