//! Widgets owned by the application state.

pub mod cursor;
pub mod textarea;

pub use cursor::BlinkCursor;
pub use textarea::{TextArea, TextAreaStyles};
