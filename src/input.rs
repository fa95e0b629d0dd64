//! Key event classification.
//!
//! Raw key codes are translated into high-level `KeyAction` values through a
//! single match, so the buffer's transition table stays explicit and can be
//! exercised without a terminal.

use ratatui::crossterm::event::KeyCode;

/// A buffer transition derived from one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a printable letter or digit.
    Insert(char),
    /// Append a space.
    Space,
    /// Append a line break.
    Newline,
    /// Remove the last buffer character, if any.
    DeleteLast,
    /// No transition.
    Ignored,
}

pub fn classify(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Backspace => KeyAction::DeleteLast,
        KeyCode::Enter => KeyAction::Newline,
        KeyCode::Char(' ') => KeyAction::Space,
        KeyCode::Char(c) if c.is_alphanumeric() => KeyAction::Insert(c),
        _ => KeyAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_letters_and_digits_insert() {
        assert_eq!(classify(KeyCode::Char('d')), KeyAction::Insert('d'));
        assert_eq!(classify(KeyCode::Char('D')), KeyAction::Insert('D'));
        assert_eq!(classify(KeyCode::Char('7')), KeyAction::Insert('7'));
        assert_eq!(classify(KeyCode::Char('ž')), KeyAction::Insert('ž'));
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(classify(KeyCode::Backspace), KeyAction::DeleteLast);
        assert_eq!(classify(KeyCode::Enter), KeyAction::Newline);
        assert_eq!(classify(KeyCode::Char(' ')), KeyAction::Space);
    }

    #[test]
    fn test_everything_else_is_ignored() {
        assert_eq!(classify(KeyCode::Esc), KeyAction::Ignored);
        assert_eq!(classify(KeyCode::F(5)), KeyAction::Ignored);
        assert_eq!(classify(KeyCode::Left), KeyAction::Ignored);
        assert_eq!(classify(KeyCode::Tab), KeyAction::Ignored);
        assert_eq!(classify(KeyCode::Char('!')), KeyAction::Ignored);
        assert_eq!(classify(KeyCode::Char('.')), KeyAction::Ignored);
    }
}
