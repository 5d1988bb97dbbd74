//! The event loop: render, wait for input or a timer, dispatch, repeat.

use super::dispatch::{dispatch, Flow};
use super::render::{render, RenderOptions};
use super::state::AppState;
use crate::core::event::{BlinkTick, InputEvent};
use crate::core::Command;
use crate::error::Result;
use crate::ui::core::geom::Size;
use crate::ui::core::text::TextFrame;
use std::io;
use std::time::{Duration, Instant};

/// Everything the loop needs from a terminal.
pub trait TerminalSession {
    /// Current size, if the session knows it.
    fn size(&mut self) -> io::Result<Option<Size>>;

    fn draw(&mut self, frame: &TextFrame) -> io::Result<()>;

    /// Waits up to `timeout` (forever when `None`) for the next event.
    /// `Ok(None)` means the timeout elapsed.
    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<InputEvent>>;

    /// Set when the process was asked to stop from outside (SIGTERM).
    fn quit_requested(&mut self) -> bool {
        false
    }
}

/// Pending blink timer. A newer blink cycle replaces the old one, so at most
/// one tick is outstanding.
#[derive(Debug, Default)]
struct Timers {
    blink: Option<(Instant, BlinkTick)>,
}

impl Timers {
    fn schedule(&mut self, cmd: Command, now: Instant) {
        match cmd {
            Command::Blink(tick) => self.blink = Some((now + cmd.delay(), tick)),
        }
    }

    fn timeout(&self, now: Instant) -> Option<Duration> {
        self.blink
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }

    fn take_due(&mut self, now: Instant) -> Option<BlinkTick> {
        match self.blink {
            Some((deadline, tick)) if deadline <= now => {
                self.blink = None;
                Some(tick)
            }
            _ => None,
        }
    }

    fn take_next(&mut self) -> Option<BlinkTick> {
        self.blink.take().map(|(_, tick)| tick)
    }
}

pub struct Program {
    state: AppState,
    options: RenderOptions,
    timers: Timers,
}

impl Program {
    pub fn new(state: AppState, options: RenderOptions) -> Self {
        Self {
            state,
            options,
            timers: Timers::default(),
        }
    }

    /// Runs until the dispatcher quits or the session fails. Returns the final
    /// state.
    pub fn run(mut self, session: &mut dyn TerminalSession) -> Result<AppState> {
        if let Some(size) = session.size()? {
            self.handle(InputEvent::Resize(size.width, size.height));
        }
        let now = Instant::now();
        for cmd in self.state.start() {
            self.timers.schedule(cmd, now);
        }
        tracing::info!(layout = ?self.state.layout().kind, "program started");

        loop {
            if session.quit_requested() {
                tracing::info!("quit requested by signal");
                break;
            }

            session.draw(&render(&self.state, &self.options))?;

            let now = Instant::now();
            let event = match self.timers.take_due(now) {
                Some(tick) => InputEvent::Tick(tick),
                None => match session.next_event(self.timers.timeout(now))? {
                    Some(event) => event,
                    None => match self.timers.take_next() {
                        Some(tick) => InputEvent::Tick(tick),
                        None => continue,
                    },
                },
            };

            if self.handle(event).is_quit() {
                break;
            }
        }

        tracing::info!("program stopped");
        Ok(self.state)
    }

    fn handle(&mut self, event: InputEvent) -> Flow {
        let flow = dispatch(event, &mut self.state);
        let now = Instant::now();
        for cmd in flow.commands() {
            self.timers.schedule(*cmd, now);
        }
        flow
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/program.rs"]
mod tests;
