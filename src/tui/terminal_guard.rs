//! Terminal mode switching with a single guaranteed restore, plus the
//! SIGINT/SIGTERM watcher that asks the program loop to stop.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

/// How long the loop gets to exit on its own after a signal before the
/// watcher restores the terminal and exits the process.
pub const SIGNAL_GRACE_PERIOD: Duration = Duration::from_secs(2);

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen and a hidden hardware cursor (the text area
/// draws its own).
#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        // Leave the alternate screen even if raw mode could not be disabled.
        let raw = terminal::disable_raw_mode();
        let screen = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
        raw.and(screen)
    }
}

/// Cloneable handle that restores the terminal at most once, from whichever
/// thread gets there first.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

/// Sets the terminal up on creation and restores it on drop.
pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        let restorer = TerminalRestorer {
            done: Arc::new(AtomicBool::new(false)),
            ops,
        };
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }

    /// Restores now and reports failure. `Drop` stays the fallback for panics
    /// and early returns.
    pub fn close(self) -> io::Result<()> {
        self.restorer.restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }

    #[cfg(unix)]
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signal {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }
}

/// Receiving end of the signal watcher. The first signal is latched so every
/// later `poll` keeps reporting it.
#[derive(Debug)]
pub struct SignalWatch {
    rx: Receiver<TerminationSignal>,
    received: Option<TerminationSignal>,
}

impl SignalWatch {
    pub fn channel() -> (Sender<TerminationSignal>, SignalWatch) {
        let (tx, rx) = mpsc::channel();
        (tx, SignalWatch { rx, received: None })
    }

    pub fn poll(&mut self) -> Option<TerminationSignal> {
        if self.received.is_none() {
            self.received = self.rx.try_recv().ok();
        }
        self.received
    }
}

/// Starts a thread that forwards SIGINT/SIGTERM to the returned watch. If the
/// process is still alive `grace` later, the terminal is restored and the
/// process exits with the signal's exit code.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    grace: Duration,
) -> io::Result<SignalWatch> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    let (tx, watch) = SignalWatch::channel();
    std::thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            for raw in signals.forever() {
                let Some(signal) = TerminationSignal::from_raw(raw) else {
                    continue;
                };
                tracing::info!(?signal, "termination signal");
                let _ = tx.send(signal);

                std::thread::sleep(grace);
                let _ = restorer.restore();
                std::process::exit(signal.exit_code());
            }
        })?;
    Ok(watch)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
