//! Blinking cursor state.

use crate::core::event::BlinkTick;
use crate::core::Command;
use std::time::Duration;

pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

#[derive(Debug, Clone)]
pub struct BlinkCursor {
    id: u64,
    visible: bool,
    blink: bool,
    interval: Duration,
}

impl Default for BlinkCursor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl BlinkCursor {
    pub fn new(blink: bool) -> Self {
        Self {
            id: 0,
            visible: true,
            blink,
            interval: BLINK_INTERVAL,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_blink(&mut self, blink: bool) {
        self.blink = blink;
        if !blink {
            self.visible = true;
        }
    }

    /// Shows the cursor and starts a new blink cycle. Ticks scheduled by
    /// earlier cycles become stale.
    pub fn restart(&mut self) -> Option<Command> {
        self.id = self.id.wrapping_add(1);
        self.visible = true;
        if !self.blink {
            return None;
        }
        Some(self.next_tick())
    }

    pub fn on_tick(&mut self, tick: BlinkTick) -> Option<Command> {
        if !self.blink || tick.id != self.id {
            return None;
        }
        self.visible = !self.visible;
        Some(self.next_tick())
    }

    fn next_tick(&self) -> Command {
        Command::Blink(BlinkTick {
            id: self.id,
            after: self.interval,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/cursor.rs"]
mod tests;
