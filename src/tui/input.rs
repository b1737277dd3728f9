//! Key mapping for the guess prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Append a character to the guess.
    Insert(char),
    /// Delete the last character.
    Backspace,
    /// Submit the current guess.
    Submit,
    /// Start a new round.
    Restart,
    /// Leave the game.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps a key event to an action.
///
/// A finished round only reacts to restart and quit keys. `q` quits while
/// the prompt is empty so it cannot eat a half-typed guess.
pub fn map_key(key: KeyEvent, locked: bool, input_empty: bool) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputAction::Quit,
            _ => InputAction::Ignore,
        };
    }

    match (key.code, locked) {
        (KeyCode::Esc, _) => InputAction::Quit,
        (KeyCode::Char('q'), true) => InputAction::Quit,
        (KeyCode::Char('r' | 'R') | KeyCode::Enter, true) => InputAction::Restart,
        (_, true) => InputAction::Ignore,

        (KeyCode::Enter, false) => InputAction::Submit,
        (KeyCode::Backspace, false) => InputAction::Backspace,
        (KeyCode::Char('q'), false) if input_empty => InputAction::Quit,
        (KeyCode::Char(c), false) if accepts(c) => InputAction::Insert(c),
        _ => InputAction::Ignore,
    }
}

/// Characters that can appear in a typed guess.
fn accepts(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | ' ')
}
