//! `TerminalSession` backed by crossterm input and a ratatui terminal.

use super::crossterm::into_input_event;
use super::terminal_guard::{SignalWatch, TerminalGuard};
use crate::app::program::TerminalSession;
use crate::core::event::{EventError, InputEvent};
use crate::ui::backend::terminal::RatatuiTerminal;
use crate::ui::core::geom::Size;
use crate::ui::core::painter::Painter;
use crate::ui::core::text::TextFrame;
use std::io;
use std::time::{Duration, Instant};

pub struct CrosstermSession {
    terminal: RatatuiTerminal,
    painter: Painter,
    signals: Option<SignalWatch>,
    // Dropped last: restores the terminal after the ratatui handle is gone.
    _guard: TerminalGuard,
}

impl CrosstermSession {
    /// Enters raw mode and the alternate screen, and starts the signal
    /// listener on unix.
    pub fn new() -> io::Result<Self> {
        let guard = TerminalGuard::new()?;
        let terminal = RatatuiTerminal::new(io::stdout())?;
        let signals = install_signals(&guard);
        Ok(Self {
            terminal,
            painter: Painter::new(),
            signals,
            _guard: guard,
        })
    }

    /// Releases the ratatui handle, then restores the terminal. Errors here
    /// are fatal to the caller.
    pub fn close(self) -> io::Result<()> {
        let CrosstermSession {
            terminal,
            _guard: guard,
            ..
        } = self;
        drop(terminal);
        guard.close()
    }
}

#[cfg(unix)]
fn install_signals(guard: &TerminalGuard) -> Option<SignalWatch> {
    use super::terminal_guard::{install_termination_signals, SIGNAL_GRACE_PERIOD};

    match install_termination_signals(guard.restorer(), SIGNAL_GRACE_PERIOD) {
        Ok(watch) => Some(watch),
        Err(err) => {
            tracing::warn!(error = %err, "signal listener unavailable");
            None
        }
    }
}

#[cfg(not(unix))]
fn install_signals(_guard: &TerminalGuard) -> Option<SignalWatch> {
    None
}

impl TerminalSession for CrosstermSession {
    fn size(&mut self) -> io::Result<Option<Size>> {
        self.terminal.size().map(Some)
    }

    fn draw(&mut self, frame: &TextFrame) -> io::Result<()> {
        let painter = &mut self.painter;
        painter.clear();
        self.terminal.draw(|backend, area| {
            frame.paint(painter, area);
            backend.draw(area, painter.cmds());
        })
    }

    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<InputEvent>> {
        let deadline = timeout.map(|t| Instant::now() + t);
        loop {
            let wait = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => Duration::from_secs(1),
            };
            let ready = match crossterm::event::poll(wait) {
                Ok(ready) => ready,
                Err(err) => return read_error(err),
            };

            if ready {
                match crossterm::event::read() {
                    Ok(event) => {
                        if let Some(event) = into_input_event(event) {
                            return Ok(Some(event));
                        }
                    }
                    Err(err) => return read_error(err),
                }
                continue;
            }

            // Waiting forever still wakes up now and then to notice signals.
            match deadline {
                Some(_) => return Ok(None),
                None if self.quit_requested() => return Ok(None),
                None => continue,
            }
        }
    }

    fn quit_requested(&mut self) -> bool {
        self.signals
            .as_mut()
            .is_some_and(|watch| watch.poll().is_some())
    }
}

/// An interrupted read is reported to the dispatcher; anything else ends the
/// session.
fn read_error(err: io::Error) -> io::Result<Option<InputEvent>> {
    if err.kind() == io::ErrorKind::Interrupted {
        tracing::debug!(error = %err, "input read interrupted");
        return Ok(Some(InputEvent::Error(EventError::new(err.to_string()))));
    }
    Err(err)
}
