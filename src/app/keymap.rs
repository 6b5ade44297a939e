//! Key mapping for the interactive session.
//!
//! Translates raw crossterm key events into the fixed set of [InputEvent]s the
//! session state machine understands. The bindings are fixed: arrow keys move
//! and resize the window, typing edits the query, Enter confirms.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One input event for the session state machine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Append a printable character to the query.
    Insert(char),
    /// Remove the last query character.
    Erase,
    /// Move the selection up.
    MovePrev,
    /// Move the selection down.
    MoveNext,
    /// Show one entry fewer (floor 0).
    Shrink,
    /// Show one entry more.
    Grow,
    /// Accept the current selection.
    Confirm,
    /// Leave without a selection.
    Cancel,
}

/// Map a keypress to an [InputEvent], or `None` for keys without a binding.
///
/// Raw mode swallows Ctrl-C, so it is bound (with Esc) to the cancel path the
/// original SIGINT delivery provided.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Backspace => Some(InputEvent::Erase),
        KeyCode::Up => Some(InputEvent::MovePrev),
        KeyCode::Down | KeyCode::Tab => Some(InputEvent::MoveNext),
        KeyCode::Left => Some(InputEvent::Shrink),
        KeyCode::Right => Some(InputEvent::Grow),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Esc => Some(InputEvent::Cancel),
        KeyCode::Char(c) => Some(InputEvent::Insert(c)),
        _ => None,
    }
}
