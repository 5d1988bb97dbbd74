//! TUI integration layer (crossterm + ratatui).
//!
//! Kept separate from `app` so the dispatcher and renderer can be driven by a
//! scripted session in tests.

pub mod crossterm;
pub mod session;
pub mod terminal_guard;

pub use session::CrosstermSession;
