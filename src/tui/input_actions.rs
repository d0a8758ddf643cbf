//! Pure action determination for input screen keyboard handling.
//!
//! `determine_input_action` maps a key to an action without touching any
//! state; `navigation` executes the action against the session.

use crate::core::Grade;
use crossterm::event::{KeyCode, KeyEvent};

/// Actions that can be triggered from the input screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Quit the application.
    Quit,

    /// Move the cursor one row up.
    MoveUp,

    /// Move the cursor one row down.
    MoveDown,

    /// Move the cursor one column left.
    MoveLeft,

    /// Move the cursor one column right.
    MoveRight,

    /// Put a grade into the selected cell.
    SetGrade(Grade),

    /// Reset the selected cell to unset.
    ClearCell,

    /// Advance the selected cell's selector (`-`, 1..6, back to `-`).
    CycleCell,

    /// Switch to the result screen.
    ShowResults,
}

/// Pure function: Determine which action a key triggers on the input screen.
///
/// # Returns
/// * `Some(action)` - The action to execute
/// * `None` - Key has no action
pub fn determine_input_action(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Char('q') => Some(InputAction::Quit),

        KeyCode::Up | KeyCode::Char('k') => Some(InputAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(InputAction::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(InputAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(InputAction::MoveRight),

        KeyCode::Char(c @ '1'..='6') => grade_from_digit(c).map(InputAction::SetGrade),
        KeyCode::Char('-') | KeyCode::Char('0') | KeyCode::Backspace | KeyCode::Delete => {
            Some(InputAction::ClearCell)
        }
        KeyCode::Char(' ') | KeyCode::Char('+') => Some(InputAction::CycleCell),

        KeyCode::Enter | KeyCode::Char('r') => Some(InputAction::ShowResults),

        _ => None,
    }
}

fn grade_from_digit(c: char) -> Option<Grade> {
    c.to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .and_then(|d| Grade::new(d).ok())
}
