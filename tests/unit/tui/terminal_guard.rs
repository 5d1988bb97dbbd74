use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct MockOps {
    calls: Mutex<Vec<&'static str>>,
    fail_setup: bool,
    fail_restore: bool,
}

impl MockOps {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminalOps for MockOps {
    fn setup(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        if self.fail_setup {
            return Err(io::Error::new(io::ErrorKind::Other, "not a tty"));
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        if self.fail_restore {
            return Err(io::Error::new(io::ErrorKind::Other, "stdout closed"));
        }
        Ok(())
    }
}

#[test]
fn terminal_guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }

    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn terminal_restorer_is_idempotent() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();
    assert!(!restorer.is_restored());

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    assert!(restorer.is_restored());
    drop(guard);

    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn close_reports_restore_failure() {
    let ops = Arc::new(MockOps {
        fail_restore: true,
        ..MockOps::default()
    });
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    let err = guard.close().unwrap_err();
    assert_eq!(err.to_string(), "stdout closed");
    assert!(restorer.is_restored());
    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn close_succeeds_once_and_drop_does_not_restore_again() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();

    guard.close().unwrap();
    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn failed_setup_returns_error_without_restoring() {
    let ops = Arc::new(MockOps {
        fail_setup: true,
        ..MockOps::default()
    });
    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(ops.calls(), vec!["setup"]);
}

#[test]
fn termination_signals_map_to_shell_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}

#[cfg(unix)]
#[test]
fn raw_signal_numbers_are_recognized() {
    use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};

    assert_eq!(TerminationSignal::from_raw(SIGINT), Some(TerminationSignal::SigInt));
    assert_eq!(TerminationSignal::from_raw(SIGTERM), Some(TerminationSignal::SigTerm));
    assert_eq!(TerminationSignal::from_raw(SIGHUP), None);
}

#[test]
fn signal_watch_latches_first_signal() {
    let (tx, mut watch) = SignalWatch::channel();
    assert_eq!(watch.poll(), None);

    tx.send(TerminationSignal::SigTerm).unwrap();
    tx.send(TerminationSignal::SigInt).unwrap();
    assert_eq!(watch.poll(), Some(TerminationSignal::SigTerm));
    assert_eq!(watch.poll(), Some(TerminationSignal::SigTerm));
}
