//! Follow-up work requested by an update.
//!
//! Updates never perform side effects themselves; they return commands that
//! the program loop executes (currently only timers).

use super::event::BlinkTick;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Deliver `InputEvent::Tick(tick)` once `tick.after` has elapsed.
    Blink(BlinkTick),
}

impl Command {
    pub fn delay(&self) -> Duration {
        match self {
            Command::Blink(tick) => tick.after,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
