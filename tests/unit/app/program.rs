use super::*;
use crate::app::state::{Layout, LayoutKind};
use crate::error::Error;
use crate::ui::core::text::Padding;
use crate::widgets::cursor::BLINK_INTERVAL;
use crate::widgets::TextArea;
use std::collections::VecDeque;

#[derive(Default)]
struct ScriptedSession {
    size: Option<Size>,
    script: VecDeque<Option<InputEvent>>,
    frames: Vec<String>,
    timeouts: Vec<Option<Duration>>,
    quit: bool,
}

impl ScriptedSession {
    fn new(script: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl TerminalSession for ScriptedSession {
    fn size(&mut self) -> io::Result<Option<Size>> {
        Ok(self.size)
    }

    fn draw(&mut self, frame: &TextFrame) -> io::Result<()> {
        self.frames.push(frame.to_plain_string());
        Ok(())
    }

    fn next_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<InputEvent>> {
        self.timeouts.push(timeout);
        self.script
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn quit_requested(&mut self) -> bool {
        self.quit
    }
}

fn program() -> Program {
    let state = AppState::new(
        vec!["Journal".to_string(), "Inbox".to_string()],
        TextArea::new(),
        Layout::new(LayoutKind::Tabs, Padding::ZERO),
    );
    Program::new(state, RenderOptions::default())
}

#[test]
fn interrupt_stops_the_loop() {
    let mut session = ScriptedSession::new([
        Some(InputEvent::char('h')),
        Some(InputEvent::char('i')),
        Some(InputEvent::interrupt()),
    ]);
    let state = program().run(&mut session).unwrap();
    assert_eq!(state.textarea.value(), "hi");
    assert_eq!(session.frames.len(), 3);
    assert!(session.frames[2].contains("hi"));
}

#[test]
fn initial_size_resizes_before_first_frame() {
    let mut session = ScriptedSession::new([Some(InputEvent::interrupt())]);
    session.size = Some(Size::new(30, 8));
    let state = program().run(&mut session).unwrap();
    assert_eq!(state.viewport(), Some(Size::new(30, 8)));
    assert_eq!(session.frames[0].lines().count(), 8);
}

#[test]
fn timeout_becomes_blink_tick() {
    let mut session = ScriptedSession::new([None, Some(InputEvent::interrupt())]);
    let state = program().run(&mut session).unwrap();

    let first = session.timeouts[0].expect("blink timer pending after start");
    assert!(first <= BLINK_INTERVAL);
    assert!(session.timeouts[1].is_some());
    assert!(state.textarea.focused());
    assert!(!state.textarea.cursor_visible());
}

#[test]
fn steady_cursor_waits_without_timeout() {
    let mut program = program();
    program.state.textarea.set_blink(false);
    let mut session = ScriptedSession::new([Some(InputEvent::interrupt())]);
    program.run(&mut session).unwrap();
    assert_eq!(session.timeouts, vec![None]);
}

#[test]
fn escape_keeps_running() {
    let mut session = ScriptedSession::new([
        Some(InputEvent::key(crate::core::event::KeyCode::Esc)),
        Some(InputEvent::interrupt()),
    ]);
    let state = program().run(&mut session).unwrap();
    assert!(!state.textarea.focused());
    assert_eq!(session.frames.len(), 2);
}

#[test]
fn session_errors_are_fatal() {
    let mut session = ScriptedSession::new([Some(InputEvent::char('x'))]);
    let err = program().run(&mut session).unwrap_err();
    assert!(matches!(err, Error::Terminal(_)));
}

#[test]
fn external_quit_stops_before_drawing() {
    let mut session = ScriptedSession::new([]);
    session.quit = true;
    program().run(&mut session).unwrap();
    assert!(session.frames.is_empty());
}
