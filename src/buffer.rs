//! The typed-text buffer: append at the end, delete from the end.

use tui_input::{Input, InputRequest};

use crate::input::KeyAction;

/// Ordered sequence of typed characters, including line breaks.
///
/// Created empty, mutated only through [`apply`](Self::apply), never
/// persisted. The cursor always sits at the end.
#[derive(Default)]
pub struct ScriptBuffer {
    input: Input,
}

impl ScriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one classified key action. Returns whether the buffer changed,
    /// which is what decides re-rendering and the console echo.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Insert(c) => {
                self.input.handle(InputRequest::InsertChar(c));
                true
            }
            KeyAction::Space => {
                self.input.handle(InputRequest::InsertChar(' '));
                true
            }
            KeyAction::Newline => {
                self.input.handle(InputRequest::InsertChar('\n'));
                true
            }
            KeyAction::DeleteLast => self
                .input
                .handle(InputRequest::DeletePrevChar)
                .is_some_and(|state| state.value),
            KeyAction::Ignored => false,
        }
    }

    pub fn as_str(&self) -> &str {
        self.input.value()
    }

    pub fn char_count(&self) -> usize {
        self.input.value().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }
}
