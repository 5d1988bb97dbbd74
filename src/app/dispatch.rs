//! Input dispatch: one event in, state mutated in place, follow-up commands out.

use super::state::AppState;
use crate::core::event::InputEvent;
use crate::core::Command;
use crate::ui::core::geom::Size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Keep running and execute these commands.
    Continue(Vec<Command>),
    /// Stop the loop and release the terminal.
    Quit,
}

impl Flow {
    pub fn idle() -> Self {
        Flow::Continue(Vec::new())
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Flow::Quit)
    }

    pub fn commands(&self) -> &[Command] {
        match self {
            Flow::Continue(cmds) => cmds,
            Flow::Quit => &[],
        }
    }
}

impl InputEvent {
    pub fn apply(self, state: &mut AppState) -> Flow {
        let mut cmds = Vec::new();
        match &self {
            InputEvent::Resize(w, h) => {
                tracing::debug!(width = w, height = h, "resize");
                state.resize(Size::new(*w, *h));
            }
            InputEvent::Key(key) if !key.is_press() => return Flow::idle(),
            InputEvent::Key(key) if key.is_interrupt() => {
                tracing::info!("interrupt");
                return Flow::Quit;
            }
            InputEvent::Key(key) if key.is_escape() => {
                if state.textarea.focused() {
                    state.textarea.blur();
                }
            }
            InputEvent::Key(_) => {
                if !state.textarea.focused() {
                    cmds.extend(state.textarea.focus());
                }
            }
            InputEvent::Error(err) => {
                tracing::warn!(error = %err, "event error");
                state.last_error = Some(err.clone());
                return Flow::idle();
            }
            InputEvent::Tick(_) => {}
        }

        cmds.extend(state.textarea.update(&self));
        Flow::Continue(cmds)
    }
}

pub fn dispatch(event: InputEvent, state: &mut AppState) -> Flow {
    event.apply(state)
}

#[cfg(test)]
#[path = "../../tests/unit/app/dispatch.rs"]
mod tests;
