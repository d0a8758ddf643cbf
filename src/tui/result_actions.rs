//! Pure action determination for result screen keyboard handling.

use crossterm::event::{KeyCode, KeyEvent};

/// Actions that can be triggered from the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    /// Quit the application.
    Quit,

    /// Go back to the input screen.
    ReturnToInput,
}

/// Pure function: Determine which action a key triggers on the result screen.
pub fn determine_result_action(key: KeyEvent) -> Option<ResultAction> {
    match key.code {
        KeyCode::Char('q') => Some(ResultAction::Quit),
        KeyCode::Esc
        | KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Char('b')
        | KeyCode::Char('h') => Some(ResultAction::ReturnToInput),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn return_keys() {
        for code in [
            KeyCode::Esc,
            KeyCode::Backspace,
            KeyCode::Left,
            KeyCode::Char('b'),
            KeyCode::Char('h'),
        ] {
            assert_eq!(
                determine_result_action(key(code)),
                Some(ResultAction::ReturnToInput)
            );
        }
    }

    #[test]
    fn quit_with_q() {
        assert_eq!(
            determine_result_action(key(KeyCode::Char('q'))),
            Some(ResultAction::Quit)
        );
    }

    #[test]
    fn grade_keys_do_nothing_on_results() {
        for c in ['1', '6', '-', ' '] {
            assert_eq!(determine_result_action(key(KeyCode::Char(c))), None);
        }
        assert_eq!(determine_result_action(key(KeyCode::Enter)), None);
    }
}
