//! Application layer: state, the input dispatcher, the layout renderer and
//! the loop that ties them to a terminal.

pub mod config;
pub mod dispatch;
pub mod program;
pub mod render;
pub mod state;

pub use config::{CliArgs, Config};
pub use dispatch::{dispatch, Flow};
pub use program::{Program, TerminalSession};
pub use render::{render, RenderOptions};
pub use state::{AppState, Layout, LayoutKind};
