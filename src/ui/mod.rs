//! UI layer (thin wrapper over `ratatui`).
//!
//! Render code produces `TextFrame`s and paint commands; only the backend
//! adapter touches `ratatui` types.

pub mod core;

pub mod backend;
